use shared::{DashboardStats, Student};
use sqlx::Row;

use super::student_repository::student_from_row;
use crate::storage::connection::DbConnection;

/// Read-only aggregate queries for the dashboard and diagnostics
#[derive(Clone)]
pub struct StatsRepository {
    db: DbConnection,
}

impl StatsRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn counts(&self) -> Result<DashboardStats, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM students) AS student_count,
                (SELECT COUNT(*) FROM faculty) AS faculty_count,
                (SELECT COUNT(*) FROM subjects) AS subject_count,
                (SELECT COUNT(*) FROM classes) AS class_count
            "#,
        )
        .fetch_one(self.db.pool())
        .await?;

        Ok(DashboardStats {
            student_count: row.try_get("student_count")?,
            faculty_count: row.try_get("faculty_count")?,
            subject_count: row.try_get("subject_count")?,
            class_count: row.try_get("class_count")?,
        })
    }

    /// Names of the user tables in the database
    pub async fn table_names(&self) -> Result<Vec<String>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT name FROM sqlite_master
            WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
            ORDER BY name
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(|row| row.try_get("name")).collect()
    }

    /// Up to `limit` students in storage order
    pub async fn student_sample(&self, limit: i64) -> Result<Vec<Student>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM students LIMIT ?")
            .bind(limit)
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(student_from_row).collect()
    }
}
