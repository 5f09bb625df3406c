use shared::{CreateAssignmentRequest, RequiredFields};
use yew::prelude::*;

use super::{parse_or_default, run_submission, select_handler, warn_missing, CreateFormProps, Submission, REQUIRED_FIELDS_MESSAGE};
use crate::components::toast::Toast;
use crate::hooks::use_records;
use crate::services::api::ApiClient;

/// Assign a faculty member to teach a subject to a class.
///
/// The three selects are populated from the faculty, class and subject lists,
/// so the form only offers ids that exist at load time.
#[function_component(AssignmentForm)]
pub fn assignment_form(props: &CreateFormProps) -> Html {
    let faculty = use_records("assignment-form", || async { ApiClient::new().list_faculty().await });
    let classes = use_records("assignment-form", || async { ApiClient::new().list_classes().await });
    let subjects = use_records("assignment-form", || async { ApiClient::new().list_subjects().await });

    let faculty_id = use_state(String::new);
    let class_id = use_state(String::new);
    let subject_code = use_state(String::new);
    let form_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let onsubmit = {
        let (faculty_id, class_id, subject_code) = (faculty_id.clone(), class_id.clone(), subject_code.clone());
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = CreateAssignmentRequest {
                faculty_id: parse_or_default(&faculty_id),
                class_id: parse_or_default(&class_id),
                subject_code: (*subject_code).clone(),
            };
            let mut missing = request.missing_fields();
            if request.faculty_id == 0 {
                missing.push("faculty_id");
            }
            if request.class_id == 0 {
                missing.push("class_id");
            }
            if !missing.is_empty() {
                warn_missing("assignment-form", &missing);
                form_error.set(Some(REQUIRED_FIELDS_MESSAGE.to_string()));
                return;
            }
            form_error.set(None);

            run_submission(
                Submission {
                    component: "assignment-form",
                    success: Toast::success("Assignment saved", "The faculty member was assigned."),
                    failure_title: "Failed to save assignment",
                },
                async move { ApiClient::new().create_assignment(&request).await },
                submitting.clone(),
                notify.clone(),
                on_created.reform(|_| ()),
            );
        })
    };

    html! {
        <form class="entity-form" onsubmit={onsubmit}>
            <h2>{"Assign Faculty"}</h2>
            {if let Some(error) = form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="form-grid">
                <div class="form-group">
                    <label for="assignment-faculty">{"Faculty *"}</label>
                    <select id="assignment-faculty" onchange={select_handler(&faculty_id)}>
                        <option value="" selected={faculty_id.is_empty()}>{"Select faculty"}</option>
                        {for faculty.rows.iter().map(|f| html! {
                            <option value={f.id.to_string()} selected={*faculty_id == f.id.to_string()}>
                                {format!("{} ({})", f.name, f.designation)}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="assignment-class">{"Class *"}</label>
                    <select id="assignment-class" onchange={select_handler(&class_id)}>
                        <option value="" selected={class_id.is_empty()}>{"Select class"}</option>
                        {for classes.rows.iter().map(|c| html! {
                            <option value={c.id.to_string()} selected={*class_id == c.id.to_string()}>
                                {c.label()}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="assignment-subject">{"Subject *"}</label>
                    <select id="assignment-subject" onchange={select_handler(&subject_code)}>
                        <option value="" selected={subject_code.is_empty()}>{"Select subject"}</option>
                        {for subjects.rows.iter().map(|s| html! {
                            <option value={s.code.clone()} selected={*subject_code == s.code}>
                                {format!("{} - {}", s.code, s.name)}
                            </option>
                        })}
                    </select>
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "Saving..." } else { "Assign" }}
            </button>
        </form>
    }
}
