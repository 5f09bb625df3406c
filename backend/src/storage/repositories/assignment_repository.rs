use shared::{AssignmentRow, CreateAssignmentRequest, FacultyAssignment};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::connection::DbConnection;

/// Repository for the `faculty_assignments` join table
#[derive(Clone)]
pub struct AssignmentRepository {
    db: DbConnection,
}

fn assignment_from_row(row: &SqliteRow) -> Result<FacultyAssignment, sqlx::Error> {
    Ok(FacultyAssignment {
        id: row.try_get("id")?,
        faculty_id: row.try_get("faculty_id")?,
        class_id: row.try_get("class_id")?,
        subject_code: row.try_get("subject_code")?,
    })
}

fn assignment_row_from_row(row: &SqliteRow) -> Result<AssignmentRow, sqlx::Error> {
    Ok(AssignmentRow {
        id: row.try_get("id")?,
        faculty_name: row.try_get("faculty_name")?,
        subject_name: row.try_get("subject_name")?,
        subject_code: row.try_get("subject_code")?,
        year: row.try_get("year")?,
        section: row.try_get("section")?,
        semester: row.try_get("semester")?,
    })
}

impl AssignmentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Assignments joined with faculty, subject and class for display
    pub async fn list_assignment_rows(&self) -> Result<Vec<AssignmentRow>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT fa.id, f.name AS faculty_name, s.name AS subject_name, s.code AS subject_code,
                   c.year, c.section, c.semester
            FROM faculty_assignments fa
            JOIN faculty f ON fa.faculty_id = f.id
            JOIN subjects s ON fa.subject_code = s.code
            JOIN classes c ON fa.class_id = c.id
            ORDER BY c.year, c.section, c.semester, s.code
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(assignment_row_from_row).collect()
    }

    pub async fn create_assignment(
        &self,
        request: &CreateAssignmentRequest,
    ) -> Result<FacultyAssignment, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO faculty_assignments (faculty_id, class_id, subject_code)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(request.faculty_id)
        .bind(request.class_id)
        .bind(&request.subject_code)
        .fetch_one(self.db.pool())
        .await?;

        assignment_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{seed_reference_rows, ReferenceRows};

    #[tokio::test]
    async fn test_create_and_list_joined_assignment() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let ReferenceRows { faculty, class, subject, .. } = seed_reference_rows(&db).await;
        let repo = AssignmentRepository::new(db);

        let created = repo
            .create_assignment(&CreateAssignmentRequest {
                faculty_id: faculty.id,
                class_id: class.id,
                subject_code: subject.code.clone(),
            })
            .await
            .unwrap();
        assert_eq!(created.faculty_id, faculty.id);

        let rows = repo.list_assignment_rows().await.unwrap();
        assert_eq!(
            rows,
            vec![AssignmentRow {
                id: created.id,
                faculty_name: faculty.name,
                subject_name: subject.name,
                subject_code: subject.code,
                year: class.year,
                section: class.section,
                semester: class.semester,
            }]
        );
    }

    #[tokio::test]
    async fn test_assignment_with_unknown_faculty_fails() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let ReferenceRows { class, subject, .. } = seed_reference_rows(&db).await;
        let repo = AssignmentRepository::new(db);

        let result = repo
            .create_assignment(&CreateAssignmentRequest {
                faculty_id: 9999,
                class_id: class.id,
                subject_code: subject.code,
            })
            .await;
        assert!(result.is_err());
    }
}
