//! Error type shared by the storage, domain and REST layers.

use shared::CsvExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordsError {
    /// Keyed lookup matched no row
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Export error: {0}")]
    Export(#[from] CsvExportError),
}

pub type RecordsResult<T> = Result<T, RecordsError>;

impl RecordsError {
    /// Fail with `MissingFields` when any required field is blank
    pub fn check_required<T: shared::RequiredFields>(request: &T) -> RecordsResult<()> {
        let missing = request.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RecordsError::MissingFields(missing))
        }
    }
}
