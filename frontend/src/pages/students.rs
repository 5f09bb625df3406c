use shared::{CellValue, ColumnSpec, Student};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{load_error, year_label, PageProps};
use crate::components::forms::StudentForm;
use crate::components::{CsvDownloadButton, DataTable, ServerExportLink, StudentDialog, Toast};
use crate::hooks::use_records;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

fn student_columns() -> Vec<ColumnSpec<Student>> {
    vec![
        ColumnSpec::new("usn", "USN", |s: &Student| CellValue::text(s.usn.as_str())),
        ColumnSpec::new("name", "Name", |s: &Student| CellValue::text(s.name.as_str())),
        ColumnSpec::new("year", "Year", |s: &Student| CellValue::Int(s.year))
            .with_formatter(year_label)
            .filterable(),
        ColumnSpec::new("section", "Section", |s: &Student| CellValue::text(s.section.as_str())).filterable(),
        ColumnSpec::new("email", "Email", |s: &Student| CellValue::text(s.email.as_str())),
        ColumnSpec::new("phone", "Phone", |s: &Student| CellValue::text(s.phone.as_str())),
    ]
}

#[function_component(StudentsPage)]
pub fn students_page(props: &PageProps) -> Html {
    let students = use_records("students", || async { ApiClient::new().list_students().await });
    let selected = use_state(|| Option::<Student>::None);

    // Reload the row before opening the dialog so it shows the stored record
    let actions = {
        let selected = selected.clone();
        let notify = props.notify.clone();
        Callback::from(move |student: Student| {
            let selected = selected.clone();
            let notify = notify.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                let usn = student.usn.clone();
                let selected = selected.clone();
                let notify = notify.clone();
                spawn_local(async move {
                    match ApiClient::new().get_student(&usn).await {
                        Ok(fresh) => selected.set(Some(fresh)),
                        Err(e) => {
                            Logger::error_with_component("students", &format!("Failed to load student {}: {}", usn, e));
                            notify.emit(Toast::failure("Failed to load student"));
                        }
                    }
                });
            });
            html! { <button class="btn btn-small" onclick={onclick}>{"View"}</button> }
        })
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Students"}</h1>
                <div class="page-actions">
                    <ServerExportLink href={ApiClient::new().export_students_url()} />
                    <CsvDownloadButton<Student> rows={students.rows.clone()} prefix="students" notify={props.notify.clone()} />
                </div>
            </div>

            <StudentForm notify={props.notify.clone()} on_created={students.refresh.clone()} />

            {load_error(&students.error)}
            <DataTable<Student>
                rows={students.rows.clone()}
                columns={student_columns()}
                search_key={Some("name")}
                actions={Some(actions)}
                loading={students.loading}
            />

            {if let Some(student) = selected.as_ref() {
                html! {
                    <StudentDialog
                        key={student.usn.clone()}
                        student={student.clone()}
                        notify={props.notify.clone()}
                        on_close={on_close}
                        on_changed={students.refresh.clone()}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
