use shared::{CreateMarkRequest, Mark, MarkRow};
use tracing::info;

use crate::error::{RecordsError, RecordsResult};
use crate::storage::{DbConnection, MarkRepository};

#[derive(Clone)]
pub struct MarkService {
    repository: MarkRepository,
}

impl MarkService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: MarkRepository::new(db),
        }
    }

    pub async fn list_marks(&self) -> RecordsResult<Vec<MarkRow>> {
        info!("Listing marks");
        Ok(self.repository.list_mark_rows().await?)
    }

    /// Record a mark; the total is computed here and stored, never re-derived later
    pub async fn create_mark(&self, request: CreateMarkRequest) -> RecordsResult<Mark> {
        RecordsError::check_required(&request)?;

        let total = Mark::total_of(request.internal_marks, request.external_marks);
        info!(
            "Recording marks for {} in {}: {} + {} = {}",
            request.usn, request.subject_code, request.internal_marks, request.external_marks, total
        );

        Ok(self
            .repository
            .create_mark(
                &request.usn,
                &request.subject_code,
                request.internal_marks,
                request.external_marks,
                total,
            )
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{seed_reference_rows, ReferenceRows};

    #[tokio::test]
    async fn test_total_is_sum_of_components() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let ReferenceRows { student, subject, .. } = seed_reference_rows(&db).await;
        let service = MarkService::new(db);

        let mark = service
            .create_mark(CreateMarkRequest {
                usn: student.usn.clone(),
                subject_code: subject.code.clone(),
                internal_marks: 35.0,
                external_marks: 55.0,
            })
            .await
            .unwrap();
        assert_eq!(mark.total_marks, 90.0);

        let rows = service.list_marks().await.unwrap();
        assert_eq!(rows[0].total_marks, 90.0);
        assert_eq!(rows[0].student_name, "Anand");
    }

    #[tokio::test]
    async fn test_missing_usn_is_rejected() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = MarkService::new(db);

        let result = service
            .create_mark(CreateMarkRequest {
                usn: String::new(),
                subject_code: "IS51".to_string(),
                internal_marks: 10.0,
                external_marks: 10.0,
            })
            .await;
        assert!(matches!(result, Err(RecordsError::MissingFields(_))));
    }
}
