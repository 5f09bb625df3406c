use shared::{CreateSubjectRequest, RequiredFields};
use yew::prelude::*;

use super::{input_handler, parse_or_default, run_submission, warn_missing, CreateFormProps, Submission, REQUIRED_FIELDS_MESSAGE};
use crate::components::toast::Toast;
use crate::services::api::ApiClient;

#[function_component(SubjectForm)]
pub fn subject_form(props: &CreateFormProps) -> Html {
    let code = use_state(String::new);
    let name = use_state(String::new);
    let credits = use_state(|| "4".to_string());
    let form_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let onsubmit = {
        let (code, name, credits) = (code.clone(), name.clone(), credits.clone());
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = CreateSubjectRequest {
                code: code.trim().to_string(),
                name: name.trim().to_string(),
                credits: parse_or_default(&credits),
            };
            if !request.has_required_fields() {
                warn_missing("subject-form", &request.missing_fields());
                form_error.set(Some(REQUIRED_FIELDS_MESSAGE.to_string()));
                return;
            }
            form_error.set(None);

            let on_done = {
                let (code, name) = (code.clone(), name.clone());
                let on_created = on_created.clone();
                Callback::from(move |_| {
                    code.set(String::new());
                    name.set(String::new());
                    on_created.emit(());
                })
            };
            run_submission(
                Submission {
                    component: "subject-form",
                    success: Toast::success("Subject added", format!("{} ({}) was added.", request.name, request.code)),
                    failure_title: "Failed to add subject",
                },
                async move { ApiClient::new().create_subject(&request).await },
                submitting.clone(),
                notify.clone(),
                on_done,
            );
        })
    };

    html! {
        <form class="entity-form" onsubmit={onsubmit}>
            <h2>{"Add Subject"}</h2>
            {if let Some(error) = form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="form-grid">
                <div class="form-group">
                    <label for="subject-code">{"Code *"}</label>
                    <input id="subject-code" type="text" placeholder="IS51" value={(*code).clone()} onchange={input_handler(&code)} />
                </div>
                <div class="form-group">
                    <label for="subject-name">{"Name *"}</label>
                    <input id="subject-name" type="text" value={(*name).clone()} onchange={input_handler(&name)} />
                </div>
                <div class="form-group">
                    <label for="subject-credits">{"Credits"}</label>
                    <input
                        id="subject-credits"
                        type="number"
                        min="0"
                        value={(*credits).clone()}
                        onchange={input_handler(&credits)}
                    />
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "Adding..." } else { "Add Subject" }}
            </button>
        </form>
    }
}
