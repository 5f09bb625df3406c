use shared::{non_blank, CreateStudentRequest, RequiredFields};
use yew::prelude::*;

use super::{input_handler, parse_or_default, run_submission, select_handler, warn_missing, CreateFormProps, Submission, REQUIRED_FIELDS_MESSAGE};
use crate::components::toast::Toast;
use crate::services::api::ApiClient;

#[function_component(StudentForm)]
pub fn student_form(props: &CreateFormProps) -> Html {
    let usn = use_state(String::new);
    let name = use_state(String::new);
    let year = use_state(|| "1".to_string());
    let section = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let address = use_state(String::new);
    let dob = use_state(String::new);
    let parent_name = use_state(String::new);
    let parent_phone = use_state(String::new);
    let form_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let fields = [&usn, &name, &section, &email, &phone, &address, &dob, &parent_name, &parent_phone];
    let clear_form = {
        let fields: Vec<UseStateHandle<String>> = fields.iter().map(|f| (*f).clone()).collect();
        let year = year.clone();
        Callback::from(move |_| {
            for field in &fields {
                field.set(String::new());
            }
            year.set("1".to_string());
        })
    };

    let onsubmit = {
        let (usn, name, year, section, email, phone) =
            (usn.clone(), name.clone(), year.clone(), section.clone(), email.clone(), phone.clone());
        let (address, dob, parent_name, parent_phone) =
            (address.clone(), dob.clone(), parent_name.clone(), parent_phone.clone());
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = CreateStudentRequest {
                usn: usn.trim().to_string(),
                name: name.trim().to_string(),
                year: parse_or_default(&year),
                section: section.trim().to_string(),
                email: email.trim().to_string(),
                phone: phone.trim().to_string(),
                address: non_blank(Some((*address).clone())),
                dob: non_blank(Some((*dob).clone())),
                parent_name: non_blank(Some((*parent_name).clone())),
                parent_phone: non_blank(Some((*parent_phone).clone())),
            };
            if !request.has_required_fields() {
                warn_missing("student-form", &request.missing_fields());
                form_error.set(Some(REQUIRED_FIELDS_MESSAGE.to_string()));
                return;
            }
            form_error.set(None);

            let on_done = {
                let clear_form = clear_form.clone();
                let on_created = on_created.clone();
                Callback::from(move |_| {
                    clear_form.emit(());
                    on_created.emit(());
                })
            };
            run_submission(
                Submission {
                    component: "student-form",
                    success: Toast::success("Student added", format!("{} was added to the roster.", request.name)),
                    failure_title: "Failed to add student",
                },
                async move { ApiClient::new().create_student(&request).await },
                submitting.clone(),
                notify.clone(),
                on_done,
            );
        })
    };

    html! {
        <form class="entity-form" onsubmit={onsubmit}>
            <h2>{"Add Student"}</h2>
            {if let Some(error) = form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="form-grid">
                <div class="form-group">
                    <label for="usn">{"USN *"}</label>
                    <input id="usn" type="text" placeholder="1SI21IS001" value={(*usn).clone()} onchange={input_handler(&usn)} />
                </div>
                <div class="form-group">
                    <label for="name">{"Name *"}</label>
                    <input id="name" type="text" value={(*name).clone()} onchange={input_handler(&name)} />
                </div>
                <div class="form-group">
                    <label for="year">{"Year *"}</label>
                    <select id="year" onchange={select_handler(&year)}>
                        {for (1..=4).map(|y: i64| html! {
                            <option value={y.to_string()} selected={*year == y.to_string()}>
                                {shared::Student::ordinal_year_label(y)}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="section">{"Section *"}</label>
                    <input id="section" type="text" placeholder="A" value={(*section).clone()} onchange={input_handler(&section)} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email *"}</label>
                    <input id="email" type="email" value={(*email).clone()} onchange={input_handler(&email)} />
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone *"}</label>
                    <input id="phone" type="tel" value={(*phone).clone()} onchange={input_handler(&phone)} />
                </div>
                <div class="form-group">
                    <label for="address">{"Address"}</label>
                    <input id="address" type="text" value={(*address).clone()} onchange={input_handler(&address)} />
                </div>
                <div class="form-group">
                    <label for="dob">{"Date of Birth"}</label>
                    <input id="dob" type="date" value={(*dob).clone()} onchange={input_handler(&dob)} />
                </div>
                <div class="form-group">
                    <label for="parent_name">{"Parent Name"}</label>
                    <input id="parent_name" type="text" value={(*parent_name).clone()} onchange={input_handler(&parent_name)} />
                </div>
                <div class="form-group">
                    <label for="parent_phone">{"Parent Phone"}</label>
                    <input id="parent_phone" type="tel" value={(*parent_phone).clone()} onchange={input_handler(&parent_phone)} />
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "Adding..." } else { "Add Student" }}
            </button>
        </form>
    }
}
