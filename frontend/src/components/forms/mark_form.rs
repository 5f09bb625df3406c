use shared::{CreateMarkRequest, Mark, RequiredFields};
use yew::prelude::*;

use super::{input_handler, parse_or_default, run_submission, select_handler, warn_missing, CreateFormProps, Submission, REQUIRED_FIELDS_MESSAGE};
use crate::components::toast::Toast;
use crate::hooks::use_records;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Record internal and external marks for one student in one subject.
/// The total is computed by the server; the form only previews it.
#[function_component(MarkForm)]
pub fn mark_form(props: &CreateFormProps) -> Html {
    let students = use_records("mark-form", || async { ApiClient::new().list_students().await });
    let subjects = use_records("mark-form", || async { ApiClient::new().list_subjects().await });

    let usn = use_state(String::new);
    let subject_code = use_state(String::new);
    let internal = use_state(String::new);
    let external = use_state(String::new);
    let form_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let total_preview = Mark::total_of(parse_or_default(&internal), parse_or_default(&external));

    let onsubmit = {
        let (usn, subject_code, internal, external) =
            (usn.clone(), subject_code.clone(), internal.clone(), external.clone());
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = CreateMarkRequest {
                usn: (*usn).clone(),
                subject_code: (*subject_code).clone(),
                internal_marks: parse_or_default(&internal),
                external_marks: parse_or_default(&external),
            };
            if !request.has_required_fields() {
                warn_missing("mark-form", &request.missing_fields());
                form_error.set(Some(REQUIRED_FIELDS_MESSAGE.to_string()));
                return;
            }
            form_error.set(None);

            let on_done = {
                let (internal, external) = (internal.clone(), external.clone());
                let on_created = on_created.clone();
                Callback::from(move |mark: Mark| {
                    internal.set(String::new());
                    external.set(String::new());
                    on_created.emit(());
                    Logger::info_with_component(
                        "mark-form",
                        &format!("Recorded {} for {} in {}", mark.total_marks, mark.usn, mark.subject_code),
                    );
                })
            };
            run_submission(
                Submission {
                    component: "mark-form",
                    success: Toast::success("Marks saved", format!("Marks recorded for {}.", request.usn)),
                    failure_title: "Failed to save marks",
                },
                async move { ApiClient::new().create_mark(&request).await },
                submitting.clone(),
                notify.clone(),
                on_done,
            );
        })
    };

    html! {
        <form class="entity-form" onsubmit={onsubmit}>
            <h2>{"Enter Marks"}</h2>
            {if let Some(error) = form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="form-grid">
                <div class="form-group">
                    <label for="mark-student">{"Student *"}</label>
                    <select id="mark-student" onchange={select_handler(&usn)}>
                        <option value="" selected={usn.is_empty()}>{"Select student"}</option>
                        {for students.rows.iter().map(|s| html! {
                            <option value={s.usn.clone()} selected={*usn == s.usn}>
                                {format!("{} - {}", s.usn, s.name)}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="mark-subject">{"Subject *"}</label>
                    <select id="mark-subject" onchange={select_handler(&subject_code)}>
                        <option value="" selected={subject_code.is_empty()}>{"Select subject"}</option>
                        {for subjects.rows.iter().map(|s| html! {
                            <option value={s.code.clone()} selected={*subject_code == s.code}>
                                {format!("{} - {}", s.code, s.name)}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="mark-internal">{"Internal"}</label>
                    <input id="mark-internal" type="number" step="0.5" min="0" value={(*internal).clone()} onchange={input_handler(&internal)} />
                </div>
                <div class="form-group">
                    <label for="mark-external">{"External"}</label>
                    <input id="mark-external" type="number" step="0.5" min="0" value={(*external).clone()} onchange={input_handler(&external)} />
                </div>
            </div>

            <div class="form-hint">{format!("Total: {}", total_preview)}</div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "Saving..." } else { "Save Marks" }}
            </button>
        </form>
    }
}
