use chrono::Local;
use serde::Serialize;
use shared::{export_filename, serialize_records};
use yew::prelude::*;

use super::toast::Toast;
use crate::services::{download::download_csv, logging::Logger};

#[derive(Properties, PartialEq)]
pub struct ServerExportLinkProps {
    pub href: String,
    #[prop_or(AttrValue::Static("Export CSV"))]
    pub label: AttrValue,
}

/// Plain link to a server-side CSV export; the browser handles the attachment
#[function_component(ServerExportLink)]
pub fn server_export_link(props: &ServerExportLinkProps) -> Html {
    html! {
        <a class="btn btn-secondary export-link" href={props.href.clone()} download="">
            {props.label.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CsvDownloadButtonProps<R: PartialEq + 'static> {
    pub rows: std::rc::Rc<Vec<R>>,
    /// Filename prefix; the current date and `.csv` are appended
    pub prefix: &'static str,
    pub notify: Callback<Toast>,
}

/// Serialize the rows already loaded in the page and download them
#[function_component(CsvDownloadButton)]
pub fn csv_download_button<R>(props: &CsvDownloadButtonProps<R>) -> Html
where
    R: Serialize + PartialEq + 'static,
{
    let onclick = {
        let rows = props.rows.clone();
        let prefix = props.prefix;
        let notify = props.notify.clone();

        Callback::from(move |_: MouseEvent| {
            let filename = export_filename(prefix, Local::now().date_naive());
            let result = serialize_records(&rows)
                .map_err(|e| e.to_string())
                .and_then(|content| download_csv(&content, &filename));

            match result {
                Ok(()) => {
                    Logger::info_with_component("export", &format!("Downloaded {} rows as {}", rows.len(), filename));
                    notify.emit(Toast::success("Export complete", format!("Saved {}", filename)));
                }
                Err(e) => {
                    Logger::error_with_component("export", &format!("CSV download failed: {}", e));
                    notify.emit(Toast::failure("Export failed"));
                }
            }
        })
    };

    html! {
        <button class="btn btn-secondary" onclick={onclick} disabled={props.rows.is_empty()}>
            {"Download CSV"}
        </button>
    }
}
