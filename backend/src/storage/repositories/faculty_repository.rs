use shared::{CreateFacultyRequest, Faculty};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::connection::DbConnection;

/// Repository for the `faculty` table
#[derive(Clone)]
pub struct FacultyRepository {
    db: DbConnection,
}

fn faculty_from_row(row: &SqliteRow) -> Result<Faculty, sqlx::Error> {
    Ok(Faculty {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        designation: row.try_get("designation")?,
    })
}

impl FacultyRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn list_faculty(&self) -> Result<Vec<Faculty>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM faculty ORDER BY name")
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(faculty_from_row).collect()
    }

    pub async fn create_faculty(&self, request: &CreateFacultyRequest) -> Result<Faculty, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO faculty (name, email, phone, designation)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.designation)
        .fetch_one(self.db.pool())
        .await?;

        faculty_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> CreateFacultyRequest {
        CreateFacultyRequest {
            name: name.to_string(),
            email: format!("{}@example.edu", name.to_lowercase()),
            phone: "080-1234".to_string(),
            designation: "Assistant Professor".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_list_orders_by_name() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = FacultyRepository::new(db);

        let first = repo.create_faculty(&request("Rao")).await.unwrap();
        let second = repo.create_faculty(&request("Iyer")).await.unwrap();
        assert!(second.id > first.id);

        let names: Vec<String> = repo.list_faculty().await.unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Iyer", "Rao"]);
    }
}
