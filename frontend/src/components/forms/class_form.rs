use shared::{CreateClassRequest, RequiredFields, Student};
use yew::prelude::*;

use super::{input_handler, parse_or_default, run_submission, select_handler, warn_missing, CreateFormProps, Submission, REQUIRED_FIELDS_MESSAGE};
use crate::components::toast::Toast;
use crate::services::api::ApiClient;

#[function_component(ClassForm)]
pub fn class_form(props: &CreateFormProps) -> Html {
    let year = use_state(|| "1".to_string());
    let section = use_state(String::new);
    let semester = use_state(|| "1".to_string());
    let form_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let onsubmit = {
        let (year, section, semester) = (year.clone(), section.clone(), semester.clone());
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = CreateClassRequest {
                year: parse_or_default(&year),
                section: section.trim().to_string(),
                semester: parse_or_default(&semester),
            };
            if !request.has_required_fields() {
                warn_missing("class-form", &request.missing_fields());
                form_error.set(Some(REQUIRED_FIELDS_MESSAGE.to_string()));
                return;
            }
            form_error.set(None);

            let on_done = {
                let section = section.clone();
                let on_created = on_created.clone();
                Callback::from(move |_| {
                    section.set(String::new());
                    on_created.emit(());
                })
            };
            run_submission(
                Submission {
                    component: "class-form",
                    success: Toast::success(
                        "Class added",
                        format!("Year {} section {} was added.", request.year, request.section),
                    ),
                    failure_title: "Failed to add class",
                },
                async move { ApiClient::new().create_class(&request).await },
                submitting.clone(),
                notify.clone(),
                on_done,
            );
        })
    };

    html! {
        <form class="entity-form" onsubmit={onsubmit}>
            <h2>{"Add Class"}</h2>
            {if let Some(error) = form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="form-grid">
                <div class="form-group">
                    <label for="class-year">{"Year *"}</label>
                    <select id="class-year" onchange={select_handler(&year)}>
                        {for (1..=4).map(|y: i64| html! {
                            <option value={y.to_string()} selected={*year == y.to_string()}>
                                {Student::ordinal_year_label(y)}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="class-section">{"Section *"}</label>
                    <input id="class-section" type="text" placeholder="A" value={(*section).clone()} onchange={input_handler(&section)} />
                </div>
                <div class="form-group">
                    <label for="class-semester">{"Semester *"}</label>
                    <select id="class-semester" onchange={select_handler(&semester)}>
                        {for (1..=8).map(|s: i64| html! {
                            <option value={s.to_string()} selected={*semester == s.to_string()}>
                                {format!("Semester {}", s)}
                            </option>
                        })}
                    </select>
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "Adding..." } else { "Add Class" }}
            </button>
        </form>
    }
}
