pub mod data_table;
pub mod export_button;
pub mod forms;
pub mod sidebar;
pub mod student_dialog;
pub mod toast;

pub use data_table::DataTable;
pub use export_button::{CsvDownloadButton, ServerExportLink};
pub use sidebar::{Page, Sidebar};
pub use student_dialog::StudentDialog;
pub use toast::{Toast, ToastStack};
