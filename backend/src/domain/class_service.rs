use shared::{Class, CreateClassRequest};
use tracing::info;

use crate::error::{RecordsError, RecordsResult};
use crate::storage::{ClassRepository, DbConnection};

#[derive(Clone)]
pub struct ClassService {
    repository: ClassRepository,
}

impl ClassService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: ClassRepository::new(db),
        }
    }

    pub async fn list_classes(&self) -> RecordsResult<Vec<Class>> {
        info!("Listing classes");
        Ok(self.repository.list_classes().await?)
    }

    pub async fn create_class(&self, request: CreateClassRequest) -> RecordsResult<Class> {
        RecordsError::check_required(&request)?;
        info!(
            "Creating class: year={}, section={}, semester={}",
            request.year, request.section, request.semester
        );
        Ok(self.repository.create_class(&request).await?)
    }
}
