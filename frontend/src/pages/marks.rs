use shared::{CellValue, ColumnSpec, MarkRow};
use yew::prelude::*;

use super::{load_error, PageProps};
use crate::components::forms::MarkForm;
use crate::components::{CsvDownloadButton, DataTable};
use crate::hooks::use_records;
use crate::services::api::ApiClient;

fn mark_columns() -> Vec<ColumnSpec<MarkRow>> {
    vec![
        ColumnSpec::new("usn", "USN", |m: &MarkRow| CellValue::text(m.usn.as_str())),
        ColumnSpec::new("student_name", "Student", |m: &MarkRow| CellValue::text(m.student_name.as_str())),
        ColumnSpec::new("subject_code", "Code", |m: &MarkRow| CellValue::text(m.subject_code.as_str())).filterable(),
        ColumnSpec::new("subject_name", "Subject", |m: &MarkRow| CellValue::text(m.subject_name.as_str())),
        ColumnSpec::new("internal_marks", "Internal", |m: &MarkRow| CellValue::Float(m.internal_marks)),
        ColumnSpec::new("external_marks", "External", |m: &MarkRow| CellValue::Float(m.external_marks)),
        ColumnSpec::new("total_marks", "Total", |m: &MarkRow| CellValue::Float(m.total_marks)),
    ]
}

#[function_component(MarksPage)]
pub fn marks_page(props: &PageProps) -> Html {
    let marks = use_records("marks", || async { ApiClient::new().list_marks().await });

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Marks"}</h1>
                <CsvDownloadButton<MarkRow> rows={marks.rows.clone()} prefix="marks" notify={props.notify.clone()} />
            </div>

            <MarkForm notify={props.notify.clone()} on_created={marks.refresh.clone()} />

            {load_error(&marks.error)}
            <DataTable<MarkRow>
                rows={marks.rows.clone()}
                columns={mark_columns()}
                search_key={Some("student_name")}
                loading={marks.loading}
            />
        </div>
    }
}
