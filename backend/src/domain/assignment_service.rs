use shared::{AssignmentRow, CreateAssignmentRequest, FacultyAssignment};
use tracing::info;

use crate::error::{RecordsError, RecordsResult};
use crate::storage::{AssignmentRepository, DbConnection};

/// Links faculty members to the subjects they teach in a class
#[derive(Clone)]
pub struct AssignmentService {
    repository: AssignmentRepository,
}

impl AssignmentService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: AssignmentRepository::new(db),
        }
    }

    pub async fn list_assignments(&self) -> RecordsResult<Vec<AssignmentRow>> {
        info!("Listing faculty assignments");
        Ok(self.repository.list_assignment_rows().await?)
    }

    pub async fn create_assignment(&self, request: CreateAssignmentRequest) -> RecordsResult<FacultyAssignment> {
        RecordsError::check_required(&request)?;
        info!(
            "Assigning faculty {} to class {} for {}",
            request.faculty_id, request.class_id, request.subject_code
        );
        Ok(self.repository.create_assignment(&request).await?)
    }
}
