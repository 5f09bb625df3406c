//! Create forms for every entity.
//!
//! Each form keeps its field values in component-local state, checks the
//! required fields with the shared `RequiredFields` rules before sending, and
//! reports the outcome through a toast.

use std::future::Future;
use std::str::FromStr;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::toast::Toast;
use crate::services::logging::Logger;

pub mod assignment_form;
pub mod class_form;
pub mod faculty_form;
pub mod mark_form;
pub mod student_form;
pub mod subject_form;

pub use assignment_form::AssignmentForm;
pub use class_form::ClassForm;
pub use faculty_form::FacultyForm;
pub use mark_form::MarkForm;
pub use student_form::StudentForm;
pub use subject_form::SubjectForm;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Props shared by every create form
#[derive(Properties, PartialEq)]
pub struct CreateFormProps {
    pub notify: Callback<Toast>,
    /// Emitted after the server accepted the new record
    pub on_created: Callback<()>,
}

pub fn input_handler(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn select_handler(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}

/// Parse a numeric field; blank or invalid text becomes the type's default (0)
pub fn parse_or_default<T: FromStr + Default>(text: &str) -> T {
    text.trim().parse().unwrap_or_default()
}

/// Log which required fields were missing when a form is rejected locally
pub fn warn_missing(component: &str, missing: &[&str]) {
    Logger::warn_with_component(component, &format!("Missing required fields: {}", missing.join(", ")));
}

/// What to report once a create request settles
pub struct Submission {
    pub component: &'static str,
    pub success: Toast,
    pub failure_title: &'static str,
}

/// Drive `request` to completion, toggling `submitting` and reporting the outcome
pub fn run_submission<T, Fut>(
    submission: Submission,
    request: Fut,
    submitting: UseStateHandle<bool>,
    notify: Callback<Toast>,
    on_done: Callback<T>,
) where
    T: 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    submitting.set(true);
    spawn_local(async move {
        match request.await {
            Ok(value) => {
                notify.emit(submission.success);
                on_done.emit(value);
            }
            Err(e) => {
                Logger::error_with_component(submission.component, &format!("{}: {}", submission.failure_title, e));
                notify.emit(Toast::failure(submission.failure_title));
            }
        }
        submitting.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default::<i64>(" 3 "), 3);
        assert_eq!(parse_or_default::<i64>(""), 0);
        assert_eq!(parse_or_default::<f64>("35.5"), 35.5);
        assert_eq!(parse_or_default::<f64>("abc"), 0.0);
    }
}
