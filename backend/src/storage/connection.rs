use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

/// Table definitions, in foreign-key dependency order
const SCHEMA: [&str; 6] = [
    r#"
    CREATE TABLE IF NOT EXISTS students (
        usn TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        year INTEGER NOT NULL,
        section TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        address TEXT,
        dob TEXT,
        parent_name TEXT,
        parent_phone TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS faculty (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        designation TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS subjects (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        credits INTEGER NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS classes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        year INTEGER NOT NULL,
        section TEXT NOT NULL,
        semester INTEGER NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS faculty_assignments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        faculty_id INTEGER NOT NULL REFERENCES faculty(id),
        class_id INTEGER NOT NULL REFERENCES classes(id),
        subject_code TEXT NOT NULL REFERENCES subjects(code)
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS marks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        usn TEXT NOT NULL REFERENCES students(usn),
        subject_code TEXT NOT NULL REFERENCES subjects(code),
        internal_marks REAL NOT NULL,
        external_marks REAL NOT NULL,
        total_marks REAL NOT NULL
    );
    "#,
];

/// DbConnection owns the SQLite pool shared by every repository
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and ensure the schema exists
    pub async fn new(url: &str) -> Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database at {}", url);
            Sqlite::create_database(url).await?
        }

        // sqlx enables foreign key enforcement on every connection by default
        let pool = SqlitePool::connect(url).await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(pool).await?;
        }

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_students_listing
            ON students(year, section, name);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_schema_creates_all_tables() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let rows = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .expect("Failed to list tables");

        let tables: Vec<String> = rows.iter().map(|r| r.get("name")).collect();
        assert_eq!(
            tables,
            vec!["classes", "faculty", "faculty_assignments", "marks", "students", "subjects"]
        );
    }

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        DbConnection::setup_schema(db.pool())
            .await
            .expect("Second schema setup should succeed");
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let result = sqlx::query(
            "INSERT INTO marks (usn, subject_code, internal_marks, external_marks, total_marks) VALUES ('NOPE', 'NOPE', 1, 1, 2)",
        )
        .execute(db.pool())
        .await;

        assert!(result.is_err(), "Insert referencing missing rows should fail");
    }
}
