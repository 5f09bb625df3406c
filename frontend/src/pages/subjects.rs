use shared::{CellValue, ColumnSpec, Subject};
use yew::prelude::*;

use super::{load_error, PageProps};
use crate::components::forms::SubjectForm;
use crate::components::{CsvDownloadButton, DataTable};
use crate::hooks::use_records;
use crate::services::api::ApiClient;

fn subject_columns() -> Vec<ColumnSpec<Subject>> {
    vec![
        ColumnSpec::new("code", "Code", |s: &Subject| CellValue::text(s.code.as_str())),
        ColumnSpec::new("name", "Name", |s: &Subject| CellValue::text(s.name.as_str())),
        ColumnSpec::new("credits", "Credits", |s: &Subject| CellValue::Int(s.credits)).filterable(),
    ]
}

#[function_component(SubjectsPage)]
pub fn subjects_page(props: &PageProps) -> Html {
    let subjects = use_records("subjects", || async { ApiClient::new().list_subjects().await });

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Subjects"}</h1>
                <CsvDownloadButton<Subject> rows={subjects.rows.clone()} prefix="subjects" notify={props.notify.clone()} />
            </div>

            <SubjectForm notify={props.notify.clone()} on_created={subjects.refresh.clone()} />

            {load_error(&subjects.error)}
            <DataTable<Subject>
                rows={subjects.rows.clone()}
                columns={subject_columns()}
                search_key={Some("name")}
                loading={subjects.loading}
            />
        </div>
    }
}
