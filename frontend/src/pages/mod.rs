//! One view per sidebar entry. Each list page owns its rows through
//! `use_records` and hands them to a `DataTable`.

use shared::{CellValue, Student};
use yew::prelude::*;

use crate::components::toast::{Toast, RETRY_MESSAGE};

pub mod assignments;
pub mod classes;
pub mod dashboard;
pub mod faculty;
pub mod marks;
pub mod students;
pub mod subjects;

pub use assignments::AssignmentsPage;
pub use classes::ClassesPage;
pub use dashboard::DashboardPage;
pub use faculty::FacultyPage;
pub use marks::MarksPage;
pub use students::StudentsPage;
pub use subjects::SubjectsPage;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub notify: Callback<Toast>,
}

/// Year column formatter: `Int(2)` renders as "2nd Year"
pub fn year_label(value: &CellValue) -> String {
    match value {
        CellValue::Int(year) => Student::ordinal_year_label(*year),
        other => other.display(),
    }
}

pub fn load_error(error: &Option<String>) -> Html {
    match error {
        Some(_) => html! {
            <div class="form-message error">{format!("Could not load records. {}", RETRY_MESSAGE)}</div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_year_label_formats_integers_only() {
        assert_eq!(year_label(&CellValue::Int(1)), "1st Year");
        assert_eq!(year_label(&CellValue::Int(3)), "3rd Year");
        assert_eq!(year_label(&CellValue::text("x")), "x");
    }
}
