use chrono::NaiveDate;
use shared::{export_filename, serialize_with_columns, STUDENT_EXPORT_COLUMNS};
use tracing::info;

use crate::error::RecordsResult;
use crate::storage::{DbConnection, StudentRepository};

/// A rendered CSV download
#[derive(Debug, Clone, PartialEq)]
pub struct StudentExport {
    pub filename: String,
    pub content: String,
}

#[derive(Clone)]
pub struct ExportService {
    students: StudentRepository,
}

impl ExportService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            students: StudentRepository::new(db),
        }
    }

    /// Every student in listing order, as CSV named for `date`
    pub async fn students_csv(&self, date: NaiveDate) -> RecordsResult<StudentExport> {
        let students = self.students.list_students().await?;
        info!("Exporting {} students to CSV", students.len());

        let content = serialize_with_columns(&students, &STUDENT_EXPORT_COLUMNS)?;
        Ok(StudentExport {
            filename: export_filename("students", date),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CreateStudentRequest;

    #[tokio::test]
    async fn test_empty_roster_exports_empty_content() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = ExportService::new(db);

        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let export = service.students_csv(date).await.unwrap();
        assert_eq!(export.filename, "students-2025-06-14.csv");
        assert_eq!(export.content, "");
    }

    #[tokio::test]
    async fn test_export_uses_fixed_header_and_quotes_values() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        StudentRepository::new(db.clone())
            .create_student(&CreateStudentRequest {
                usn: "1SI21IS001".to_string(),
                name: "Aditya \"Adi\" Sharma".to_string(),
                year: 3,
                section: "A".to_string(),
                email: "aditya.s@ise.edu".to_string(),
                phone: "9182736450".to_string(),
                address: Some("12, MG Road".to_string()),
                dob: None,
                parent_name: None,
                parent_phone: None,
            })
            .await
            .unwrap();
        let service = ExportService::new(db);

        let export = service
            .students_csv(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
            .await
            .unwrap();
        let mut lines = export.content.lines();
        assert_eq!(
            lines.next(),
            Some("USN,Name,Year,Section,Email,Phone,Address,DOB,Parent Name,Parent Phone")
        );
        assert_eq!(
            lines.next(),
            Some(
                r#""1SI21IS001","Aditya ""Adi"" Sharma","3","A","aditya.s@ise.edu","9182736450","12, MG Road","","","""#
            )
        );
        assert_eq!(lines.next(), None);
    }
}
