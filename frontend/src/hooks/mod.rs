pub mod use_records;

pub use use_records::{use_records, UseRecordsHandle};
