use shared::{CreateSubjectRequest, Subject};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::connection::DbConnection;

/// Repository for the `subjects` table
#[derive(Clone)]
pub struct SubjectRepository {
    db: DbConnection,
}

fn subject_from_row(row: &SqliteRow) -> Result<Subject, sqlx::Error> {
    Ok(Subject {
        code: row.try_get("code")?,
        name: row.try_get("name")?,
        credits: row.try_get("credits")?,
    })
}

impl SubjectRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn list_subjects(&self) -> Result<Vec<Subject>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM subjects ORDER BY code")
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(subject_from_row).collect()
    }

    pub async fn create_subject(&self, request: &CreateSubjectRequest) -> Result<Subject, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO subjects (code, name, credits)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&request.code)
        .bind(&request.name)
        .bind(request.credits)
        .fetch_one(self.db.pool())
        .await?;

        subject_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(code: &str, name: &str) -> CreateSubjectRequest {
        CreateSubjectRequest {
            code: code.to_string(),
            name: name.to_string(),
            credits: 4,
        }
    }

    #[tokio::test]
    async fn test_subjects_ordered_by_code_and_code_is_unique() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = SubjectRepository::new(db);

        repo.create_subject(&request("IS62", "Machine Learning")).await.unwrap();
        repo.create_subject(&request("IS51", "Databases")).await.unwrap();
        assert!(repo.create_subject(&request("IS51", "Duplicate")).await.is_err());

        let codes: Vec<String> = repo.list_subjects().await.unwrap().into_iter().map(|s| s.code).collect();
        assert_eq!(codes, vec!["IS51", "IS62"]);
    }
}
