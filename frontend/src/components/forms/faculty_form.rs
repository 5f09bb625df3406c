use shared::{CreateFacultyRequest, RequiredFields};
use yew::prelude::*;

use super::{input_handler, run_submission, warn_missing, CreateFormProps, Submission, REQUIRED_FIELDS_MESSAGE};
use crate::components::toast::Toast;
use crate::services::api::ApiClient;

#[function_component(FacultyForm)]
pub fn faculty_form(props: &CreateFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let designation = use_state(String::new);
    let form_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let onsubmit = {
        let (name, email, phone, designation) = (name.clone(), email.clone(), phone.clone(), designation.clone());
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = CreateFacultyRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                phone: phone.trim().to_string(),
                designation: designation.trim().to_string(),
            };
            if !request.has_required_fields() {
                warn_missing("faculty-form", &request.missing_fields());
                form_error.set(Some(REQUIRED_FIELDS_MESSAGE.to_string()));
                return;
            }
            form_error.set(None);

            let on_done = {
                let fields = [name.clone(), email.clone(), phone.clone(), designation.clone()];
                let on_created = on_created.clone();
                Callback::from(move |_| {
                    for field in &fields {
                        field.set(String::new());
                    }
                    on_created.emit(());
                })
            };
            run_submission(
                Submission {
                    component: "faculty-form",
                    success: Toast::success("Faculty added", format!("{} was added.", request.name)),
                    failure_title: "Failed to add faculty",
                },
                async move { ApiClient::new().create_faculty(&request).await },
                submitting.clone(),
                notify.clone(),
                on_done,
            );
        })
    };

    html! {
        <form class="entity-form" onsubmit={onsubmit}>
            <h2>{"Add Faculty"}</h2>
            {if let Some(error) = form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="form-grid">
                <div class="form-group">
                    <label for="faculty-name">{"Name *"}</label>
                    <input id="faculty-name" type="text" value={(*name).clone()} onchange={input_handler(&name)} />
                </div>
                <div class="form-group">
                    <label for="faculty-email">{"Email *"}</label>
                    <input id="faculty-email" type="email" value={(*email).clone()} onchange={input_handler(&email)} />
                </div>
                <div class="form-group">
                    <label for="faculty-phone">{"Phone *"}</label>
                    <input id="faculty-phone" type="tel" value={(*phone).clone()} onchange={input_handler(&phone)} />
                </div>
                <div class="form-group">
                    <label for="faculty-designation">{"Designation *"}</label>
                    <input
                        id="faculty-designation"
                        type="text"
                        placeholder="Assistant Professor"
                        value={(*designation).clone()}
                        onchange={input_handler(&designation)}
                    />
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "Adding..." } else { "Add Faculty" }}
            </button>
        </form>
    }
}
