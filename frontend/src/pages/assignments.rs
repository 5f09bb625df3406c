use shared::{AssignmentRow, CellValue, ColumnSpec};
use yew::prelude::*;

use super::{load_error, year_label, PageProps};
use crate::components::forms::AssignmentForm;
use crate::components::{CsvDownloadButton, DataTable};
use crate::hooks::use_records;
use crate::services::api::ApiClient;

fn assignment_columns() -> Vec<ColumnSpec<AssignmentRow>> {
    vec![
        ColumnSpec::new("faculty_name", "Faculty", |a: &AssignmentRow| CellValue::text(a.faculty_name.as_str())),
        ColumnSpec::new("subject_code", "Code", |a: &AssignmentRow| CellValue::text(a.subject_code.as_str())),
        ColumnSpec::new("subject_name", "Subject", |a: &AssignmentRow| CellValue::text(a.subject_name.as_str())),
        ColumnSpec::new("year", "Year", |a: &AssignmentRow| CellValue::Int(a.year))
            .with_formatter(year_label)
            .filterable(),
        ColumnSpec::new("section", "Section", |a: &AssignmentRow| CellValue::text(a.section.as_str())).filterable(),
        ColumnSpec::new("semester", "Semester", |a: &AssignmentRow| CellValue::Int(a.semester)),
    ]
}

#[function_component(AssignmentsPage)]
pub fn assignments_page(props: &PageProps) -> Html {
    let assignments = use_records("assignments", || async { ApiClient::new().list_assignments().await });

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Faculty Assignments"}</h1>
                <CsvDownloadButton<AssignmentRow>
                    rows={assignments.rows.clone()}
                    prefix="faculty_assignments"
                    notify={props.notify.clone()}
                />
            </div>

            <AssignmentForm notify={props.notify.clone()} on_created={assignments.refresh.clone()} />

            {load_error(&assignments.error)}
            <DataTable<AssignmentRow>
                rows={assignments.rows.clone()}
                columns={assignment_columns()}
                search_key={Some("faculty_name")}
                loading={assignments.loading}
            />
        </div>
    }
}
