use shared::{Class, CreateClassRequest};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::connection::DbConnection;

/// Repository for the `classes` table
#[derive(Clone)]
pub struct ClassRepository {
    db: DbConnection,
}

fn class_from_row(row: &SqliteRow) -> Result<Class, sqlx::Error> {
    Ok(Class {
        id: row.try_get("id")?,
        year: row.try_get("year")?,
        section: row.try_get("section")?,
        semester: row.try_get("semester")?,
    })
}

impl ClassRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn list_classes(&self) -> Result<Vec<Class>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM classes ORDER BY year, section, semester")
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(class_from_row).collect()
    }

    pub async fn create_class(&self, request: &CreateClassRequest) -> Result<Class, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO classes (year, section, semester)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(request.year)
        .bind(&request.section)
        .bind(request.semester)
        .fetch_one(self.db.pool())
        .await?;

        class_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_classes_ordered_by_year_section_semester() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = ClassRepository::new(db);

        for (year, section, semester) in [(2, "A", 4), (1, "B", 1), (2, "A", 3), (1, "A", 2)] {
            repo.create_class(&CreateClassRequest {
                year,
                section: section.to_string(),
                semester,
            })
            .await
            .unwrap();
        }

        let order: Vec<(i64, String, i64)> = repo
            .list_classes()
            .await
            .unwrap()
            .into_iter()
            .map(|c| (c.year, c.section, c.semester))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, "A".to_string(), 2),
                (1, "B".to_string(), 1),
                (2, "A".to_string(), 3),
                (2, "A".to_string(), 4),
            ]
        );
    }
}
