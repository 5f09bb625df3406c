//! Modal for a single student: details, inline edit and delete.

use shared::{non_blank, RequiredFields, Student, UpdateStudentRequest};
use yew::prelude::*;

use super::forms::{input_handler, parse_or_default, run_submission, select_handler, warn_missing, Submission, REQUIRED_FIELDS_MESSAGE};
use super::toast::Toast;
use crate::services::api::ApiClient;

#[derive(Clone, Copy, PartialEq)]
enum DialogMode {
    Details,
    Edit,
    ConfirmDelete,
}

#[derive(Properties, PartialEq)]
pub struct StudentDialogProps {
    pub student: Student,
    pub notify: Callback<Toast>,
    pub on_close: Callback<()>,
    /// Emitted after a successful update or delete so the owner can reload
    pub on_changed: Callback<()>,
}

fn detail_row(label: &'static str, value: Option<&str>) -> Html {
    html! {
        <div class="detail-row">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value.unwrap_or("-")}</span>
        </div>
    }
}

#[function_component(StudentDialog)]
pub fn student_dialog(props: &StudentDialogProps) -> Html {
    let mode = use_state(|| DialogMode::Details);
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);

    let student = &props.student;
    let name = use_state(|| student.name.clone());
    let year = use_state(|| student.year.to_string());
    let section = use_state(|| student.section.clone());
    let email = use_state(|| student.email.clone());
    let phone = use_state(|| student.phone.clone());
    let address = use_state(|| student.address.clone().unwrap_or_default());
    let dob = use_state(|| student.dob.clone().unwrap_or_default());
    let parent_name = use_state(|| student.parent_name.clone().unwrap_or_default());
    let parent_phone = use_state(|| student.parent_phone.clone().unwrap_or_default());

    let set_mode = |target: DialogMode| {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(target))
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let finished = {
        let on_changed = props.on_changed.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            on_changed.emit(());
            on_close.emit(());
        })
    };

    let on_save = {
        let usn = student.usn.clone();
        let (name, year, section, email, phone) =
            (name.clone(), year.clone(), section.clone(), email.clone(), phone.clone());
        let (address, dob, parent_name, parent_phone) =
            (address.clone(), dob.clone(), parent_name.clone(), parent_phone.clone());
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let finished = finished.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = UpdateStudentRequest {
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
                warn_missing("student-dialog", &request.missing_fields());
                form_error.set(Some(REQUIRED_FIELDS_MESSAGE.to_string()));
                return;
            }
            form_error.set(None);

            let usn = usn.clone();
            run_submission(
                Submission {
                    component: "student-dialog",
                    success: Toast::success("Student updated", format!("{} was saved.", request.name)),
                    failure_title: "Failed to update student",
                },
                async move { ApiClient::new().update_student(&usn, &request).await },
                submitting.clone(),
                notify.clone(),
                finished.reform(|_: Student| ()),
            );
        })
    };

    let on_delete = {
        let usn = student.usn.clone();
        let student_name = student.name.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let finished = finished.clone();

        Callback::from(move |_: MouseEvent| {
            let usn = usn.clone();
            run_submission(
                Submission {
                    component: "student-dialog",
                    success: Toast::success("Student deleted", format!("{} was removed.", student_name)),
                    failure_title: "Failed to delete student",
                },
                async move { ApiClient::new().delete_student(&usn).await },
                submitting.clone(),
                notify.clone(),
                finished.reform(|_| ()),
            );
        })
    };

    let body = match *mode {
        DialogMode::Details => html! {
            <div class="student-details">
                {detail_row("USN", Some(&student.usn))}
                {detail_row("Name", Some(&student.name))}
                {detail_row("Year", Some(&Student::ordinal_year_label(student.year)))}
                {detail_row("Section", Some(&student.section))}
                {detail_row("Email", Some(&student.email))}
                {detail_row("Phone", Some(&student.phone))}
                {detail_row("Address", student.address.as_deref())}
                {detail_row("Date of Birth", student.dob.as_deref())}
                {detail_row("Parent Name", student.parent_name.as_deref())}
                {detail_row("Parent Phone", student.parent_phone.as_deref())}

                <div class="modal-actions">
                    <button class="btn btn-primary" onclick={set_mode(DialogMode::Edit)}>{"Edit"}</button>
                    <button class="btn btn-danger" onclick={set_mode(DialogMode::ConfirmDelete)}>{"Delete"}</button>
                </div>
            </div>
        },
        DialogMode::Edit => html! {
            <form class="entity-form" onsubmit={on_save}>
                {if let Some(error) = form_error.as_ref() {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}

                <div class="form-grid">
                    <div class="form-group">
                        <label for="edit-name">{"Name *"}</label>
                        <input id="edit-name" type="text" value={(*name).clone()} onchange={input_handler(&name)} />
                    </div>
                    <div class="form-group">
                        <label for="edit-year">{"Year *"}</label>
                        <select id="edit-year" onchange={select_handler(&year)}>
                            {for (1..=4).map(|y: i64| html! {
                                <option value={y.to_string()} selected={*year == y.to_string()}>
                                    {Student::ordinal_year_label(y)}
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="edit-section">{"Section *"}</label>
                        <input id="edit-section" type="text" value={(*section).clone()} onchange={input_handler(&section)} />
                    </div>
                    <div class="form-group">
                        <label for="edit-email">{"Email *"}</label>
                        <input id="edit-email" type="email" value={(*email).clone()} onchange={input_handler(&email)} />
                    </div>
                    <div class="form-group">
                        <label for="edit-phone">{"Phone *"}</label>
                        <input id="edit-phone" type="tel" value={(*phone).clone()} onchange={input_handler(&phone)} />
                    </div>
                    <div class="form-group">
                        <label for="edit-address">{"Address"}</label>
                        <input id="edit-address" type="text" value={(*address).clone()} onchange={input_handler(&address)} />
                    </div>
                    <div class="form-group">
                        <label for="edit-dob">{"Date of Birth"}</label>
                        <input id="edit-dob" type="date" value={(*dob).clone()} onchange={input_handler(&dob)} />
                    </div>
                    <div class="form-group">
                        <label for="edit-parent-name">{"Parent Name"}</label>
                        <input id="edit-parent-name" type="text" value={(*parent_name).clone()} onchange={input_handler(&parent_name)} />
                    </div>
                    <div class="form-group">
                        <label for="edit-parent-phone">{"Parent Phone"}</label>
                        <input id="edit-parent-phone" type="tel" value={(*parent_phone).clone()} onchange={input_handler(&parent_phone)} />
                    </div>
                </div>

                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" onclick={set_mode(DialogMode::Details)}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        {if *submitting { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        },
        DialogMode::ConfirmDelete => html! {
            <div class="confirm-delete">
                <p>{format!("Delete {} ({})? This cannot be undone.", student.name, student.usn)}</p>
                <div class="modal-actions">
                    <button class="btn btn-secondary" onclick={set_mode(DialogMode::Details)}>{"Cancel"}</button>
                    <button class="btn btn-danger" onclick={on_delete} disabled={*submitting}>
                        {if *submitting { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        },
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h2>{&student.name}</h2>
                    <button class="modal-close" onclick={close}>{"×"}</button>
                </div>
                {body}
            </div>
        </div>
    }
}
