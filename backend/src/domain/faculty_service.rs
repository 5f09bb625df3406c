use shared::{CreateFacultyRequest, Faculty};
use tracing::info;

use crate::error::{RecordsError, RecordsResult};
use crate::storage::{DbConnection, FacultyRepository};

#[derive(Clone)]
pub struct FacultyService {
    repository: FacultyRepository,
}

impl FacultyService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: FacultyRepository::new(db),
        }
    }

    pub async fn list_faculty(&self) -> RecordsResult<Vec<Faculty>> {
        info!("Listing faculty");
        Ok(self.repository.list_faculty().await?)
    }

    pub async fn create_faculty(&self, request: CreateFacultyRequest) -> RecordsResult<Faculty> {
        RecordsError::check_required(&request)?;
        info!("Creating faculty member: {}", request.name);

        let faculty = self.repository.create_faculty(&request).await?;
        info!("Created faculty member with id {}", faculty.id);
        Ok(faculty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list_faculty() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = FacultyService::new(db);

        let created = service
            .create_faculty(CreateFacultyRequest {
                name: "Dr. Rao".to_string(),
                email: "rao@example.edu".to_string(),
                phone: "9123456780".to_string(),
                designation: "Professor".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(service.list_faculty().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_missing_designation_is_rejected() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = FacultyService::new(db);

        let result = service
            .create_faculty(CreateFacultyRequest {
                name: "Dr. Rao".to_string(),
                email: "rao@example.edu".to_string(),
                phone: "9123456780".to_string(),
                designation: String::new(),
            })
            .await;
        assert!(matches!(result, Err(RecordsError::MissingFields(_))));
    }
}
