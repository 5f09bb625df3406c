use shared::{CreateSubjectRequest, Subject};
use tracing::info;

use crate::error::{RecordsError, RecordsResult};
use crate::storage::{DbConnection, SubjectRepository};

#[derive(Clone)]
pub struct SubjectService {
    repository: SubjectRepository,
}

impl SubjectService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: SubjectRepository::new(db),
        }
    }

    pub async fn list_subjects(&self) -> RecordsResult<Vec<Subject>> {
        info!("Listing subjects");
        Ok(self.repository.list_subjects().await?)
    }

    pub async fn create_subject(&self, request: CreateSubjectRequest) -> RecordsResult<Subject> {
        RecordsError::check_required(&request)?;
        info!("Creating subject: {} ({})", request.code, request.name);
        Ok(self.repository.create_subject(&request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_code_is_a_database_error() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = SubjectService::new(db);
        let request = CreateSubjectRequest {
            code: "IS51".to_string(),
            name: "Databases".to_string(),
            credits: 4,
        };

        service.create_subject(request.clone()).await.unwrap();
        let duplicate = service.create_subject(request).await;
        assert!(matches!(duplicate, Err(RecordsError::Database(_))));
        assert_eq!(service.list_subjects().await.unwrap().len(), 1);
    }
}
