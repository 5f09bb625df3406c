use shared::{CellValue, Class, ColumnSpec};
use yew::prelude::*;

use super::{load_error, year_label, PageProps};
use crate::components::forms::ClassForm;
use crate::components::{CsvDownloadButton, DataTable};
use crate::hooks::use_records;
use crate::services::api::ApiClient;

fn class_columns() -> Vec<ColumnSpec<Class>> {
    vec![
        ColumnSpec::new("year", "Year", |c: &Class| CellValue::Int(c.year))
            .with_formatter(year_label)
            .filterable(),
        ColumnSpec::new("section", "Section", |c: &Class| CellValue::text(c.section.as_str())).filterable(),
        ColumnSpec::new("semester", "Semester", |c: &Class| CellValue::Int(c.semester)).filterable(),
    ]
}

#[function_component(ClassesPage)]
pub fn classes_page(props: &PageProps) -> Html {
    let classes = use_records("classes", || async { ApiClient::new().list_classes().await });

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Classes"}</h1>
                <CsvDownloadButton<Class> rows={classes.rows.clone()} prefix="classes" notify={props.notify.clone()} />
            </div>

            <ClassForm notify={props.notify.clone()} on_created={classes.refresh.clone()} />

            {load_error(&classes.error)}
            <DataTable<Class> rows={classes.rows.clone()} columns={class_columns()} loading={classes.loading} />
        </div>
    }
}
