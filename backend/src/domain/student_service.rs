use shared::{non_blank, CreateStudentRequest, Student, UpdateStudentRequest};
use tracing::info;

use crate::error::{RecordsError, RecordsResult};
use crate::storage::{DbConnection, StudentRepository};

/// Service for the student roster, the only entity with full CRUD
#[derive(Clone)]
pub struct StudentService {
    repository: StudentRepository,
}

/// Blank optional contact fields are stored as NULL
fn clear_blank_optionals(
    address: &mut Option<String>,
    dob: &mut Option<String>,
    parent_name: &mut Option<String>,
    parent_phone: &mut Option<String>,
) {
    for field in [address, dob, parent_name, parent_phone] {
        *field = non_blank(field.take());
    }
}

impl StudentService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: StudentRepository::new(db),
        }
    }

    pub async fn list_students(&self) -> RecordsResult<Vec<Student>> {
        info!("Listing students");
        let students = self.repository.list_students().await?;
        info!("Found {} students", students.len());
        Ok(students)
    }

    pub async fn get_student(&self, usn: &str) -> RecordsResult<Student> {
        info!("Getting student: {}", usn);
        self.repository
            .get_student(usn)
            .await?
            .ok_or(RecordsError::NotFound("Student"))
    }

    pub async fn create_student(&self, mut request: CreateStudentRequest) -> RecordsResult<Student> {
        RecordsError::check_required(&request)?;
        clear_blank_optionals(
            &mut request.address,
            &mut request.dob,
            &mut request.parent_name,
            &mut request.parent_phone,
        );
        info!("Creating student: usn={}, name={}", request.usn, request.name);

        let student = self.repository.create_student(&request).await?;
        info!("Created student {}", student.usn);
        Ok(student)
    }

    /// Replace all mutable fields of the student identified by `usn`
    pub async fn update_student(&self, usn: &str, mut request: UpdateStudentRequest) -> RecordsResult<Student> {
        RecordsError::check_required(&request)?;
        clear_blank_optionals(
            &mut request.address,
            &mut request.dob,
            &mut request.parent_name,
            &mut request.parent_phone,
        );
        info!("Updating student: {}", usn);

        self.repository
            .update_student(usn, &request)
            .await?
            .ok_or(RecordsError::NotFound("Student"))
    }

    pub async fn delete_student(&self, usn: &str) -> RecordsResult<Student> {
        info!("Deleting student: {}", usn);
        self.repository
            .delete_student(usn)
            .await?
            .ok_or(RecordsError::NotFound("Student"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn create_test_service() -> StudentService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        StudentService::new(db)
    }

    fn request(usn: &str, name: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            usn: usn.to_string(),
            name: name.to_string(),
            year: 2,
            section: "A".to_string(),
            email: "student@example.edu".to_string(),
            phone: "9876543210".to_string(),
            address: Some("Bengaluru".to_string()),
            dob: None,
            parent_name: None,
            parent_phone: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = create_test_service().await;
        let created = service.create_student(request("1RV21IS001", "Anand")).await.unwrap();

        let fetched = service.get_student("1RV21IS001").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.address.as_deref(), Some("Bengaluru"));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = create_test_service().await;

        let result = service.create_student(request("1RV21IS001", "  ")).await;
        assert!(matches!(result, Err(RecordsError::MissingFields(fields)) if fields == vec!["name"]));
        assert!(service.list_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_student_is_not_found() {
        let service = create_test_service().await;

        assert!(matches!(service.get_student("NOPE").await, Err(RecordsError::NotFound("Student"))));
        assert!(matches!(service.delete_student("NOPE").await, Err(RecordsError::NotFound("Student"))));

        let update = UpdateStudentRequest::from(Student {
            usn: "NOPE".to_string(),
            name: "Nobody".to_string(),
            year: 1,
            section: "A".to_string(),
            email: "n@example.edu".to_string(),
            phone: "1".to_string(),
            address: None,
            dob: None,
            parent_name: None,
            parent_phone: None,
        });
        assert!(matches!(
            service.update_student("NOPE", update).await,
            Err(RecordsError::NotFound("Student"))
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let service = create_test_service().await;
        let created = service.create_student(request("1RV21IS001", "Anand")).await.unwrap();

        let mut update = UpdateStudentRequest::from(created);
        update.section = "B".to_string();
        update.address = None;
        let updated = service.update_student("1RV21IS001", update).await.unwrap();
        assert_eq!(updated.section, "B");
        assert_eq!(updated.address, None);

        let deleted = service.delete_student("1RV21IS001").await.unwrap();
        assert_eq!(deleted.usn, "1RV21IS001");
        assert!(service.list_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_optional_fields_are_stored_as_null() {
        let service = create_test_service().await;
        let mut create = request("1RV21IS001", "Anand");
        create.address = Some("   ".to_string());
        create.parent_name = Some("Ravi".to_string());
        let created = service.create_student(create).await.unwrap();
        assert_eq!(created.address, None);
        assert_eq!(created.parent_name.as_deref(), Some("Ravi"));

        let mut update = UpdateStudentRequest::from(created);
        update.address = Some(String::new());
        update.dob = Some(String::new());
        update.parent_name = Some(String::new());
        update.parent_phone = Some("9000000001".to_string());
        let updated = service.update_student("1RV21IS001", update).await.unwrap();
        assert_eq!(updated.address, None);
        assert_eq!(updated.dob, None);
        assert_eq!(updated.parent_name, None);
        assert_eq!(updated.parent_phone.as_deref(), Some("9000000001"));
    }
}
