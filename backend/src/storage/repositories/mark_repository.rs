use shared::{Mark, MarkRow};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::connection::DbConnection;

/// Repository for the `marks` table
#[derive(Clone)]
pub struct MarkRepository {
    db: DbConnection,
}

fn mark_from_row(row: &SqliteRow) -> Result<Mark, sqlx::Error> {
    Ok(Mark {
        id: row.try_get("id")?,
        usn: row.try_get("usn")?,
        subject_code: row.try_get("subject_code")?,
        internal_marks: row.try_get("internal_marks")?,
        external_marks: row.try_get("external_marks")?,
        total_marks: row.try_get("total_marks")?,
    })
}

fn mark_row_from_row(row: &SqliteRow) -> Result<MarkRow, sqlx::Error> {
    Ok(MarkRow {
        id: row.try_get("id")?,
        usn: row.try_get("usn")?,
        student_name: row.try_get("student_name")?,
        subject_code: row.try_get("subject_code")?,
        subject_name: row.try_get("subject_name")?,
        internal_marks: row.try_get("internal_marks")?,
        external_marks: row.try_get("external_marks")?,
        total_marks: row.try_get("total_marks")?,
    })
}

impl MarkRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Marks joined with student and subject names, ordered by student then subject
    pub async fn list_mark_rows(&self) -> Result<Vec<MarkRow>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT m.id, m.usn, s.name AS student_name, m.subject_code,
                   sub.name AS subject_name, m.internal_marks, m.external_marks, m.total_marks
            FROM marks m
            JOIN students s ON m.usn = s.usn
            JOIN subjects sub ON m.subject_code = sub.code
            ORDER BY s.name, sub.name
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(mark_row_from_row).collect()
    }

    /// Insert a mark record; `total_marks` is stored exactly as given
    pub async fn create_mark(
        &self,
        usn: &str,
        subject_code: &str,
        internal_marks: f64,
        external_marks: f64,
        total_marks: f64,
    ) -> Result<Mark, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO marks (usn, subject_code, internal_marks, external_marks, total_marks)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(usn)
        .bind(subject_code)
        .bind(internal_marks)
        .bind(external_marks)
        .bind(total_marks)
        .fetch_one(self.db.pool())
        .await?;

        mark_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{seed_reference_rows, ReferenceRows};

    #[tokio::test]
    async fn test_create_and_list_joined_marks() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let ReferenceRows { student, subject, .. } = seed_reference_rows(&db).await;
        let repo = MarkRepository::new(db);

        let created = repo
            .create_mark(&student.usn, &subject.code, 35.0, 55.0, 90.0)
            .await
            .unwrap();
        assert_eq!(created.total_marks, 90.0);

        let rows = repo.list_mark_rows().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_name, student.name);
        assert_eq!(rows[0].subject_name, subject.name);
        assert_eq!(rows[0].total_marks, 90.0);
    }

    #[tokio::test]
    async fn test_mark_for_unknown_student_fails() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let ReferenceRows { subject, .. } = seed_reference_rows(&db).await;
        let repo = MarkRepository::new(db);

        assert!(repo.create_mark("NOPE", &subject.code, 1.0, 1.0, 2.0).await.is_err());
    }
}
