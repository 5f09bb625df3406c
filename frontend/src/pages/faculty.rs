use shared::{CellValue, ColumnSpec, Faculty};
use yew::prelude::*;

use super::{load_error, PageProps};
use crate::components::forms::FacultyForm;
use crate::components::{CsvDownloadButton, DataTable};
use crate::hooks::use_records;
use crate::services::api::ApiClient;

fn faculty_columns() -> Vec<ColumnSpec<Faculty>> {
    vec![
        ColumnSpec::new("name", "Name", |f: &Faculty| CellValue::text(f.name.as_str())),
        ColumnSpec::new("email", "Email", |f: &Faculty| CellValue::text(f.email.as_str())),
        ColumnSpec::new("phone", "Phone", |f: &Faculty| CellValue::text(f.phone.as_str())),
        ColumnSpec::new("designation", "Designation", |f: &Faculty| CellValue::text(f.designation.as_str()))
            .filterable(),
    ]
}

#[function_component(FacultyPage)]
pub fn faculty_page(props: &PageProps) -> Html {
    let faculty = use_records("faculty", || async { ApiClient::new().list_faculty().await });

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Faculty"}</h1>
                <CsvDownloadButton<Faculty> rows={faculty.rows.clone()} prefix="faculty" notify={props.notify.clone()} />
            </div>

            <FacultyForm notify={props.notify.clone()} on_created={faculty.refresh.clone()} />

            {load_error(&faculty.error)}
            <DataTable<Faculty>
                rows={faculty.rows.clone()}
                columns={faculty_columns()}
                search_key={Some("name")}
                loading={faculty.loading}
            />
        </div>
    }
}
