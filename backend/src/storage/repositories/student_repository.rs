use shared::{CreateStudentRequest, Student, UpdateStudentRequest};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::connection::DbConnection;

/// Repository for the `students` table
#[derive(Clone)]
pub struct StudentRepository {
    db: DbConnection,
}

pub(crate) fn student_from_row(row: &SqliteRow) -> Result<Student, sqlx::Error> {
    Ok(Student {
        usn: row.try_get("usn")?,
        name: row.try_get("name")?,
        year: row.try_get("year")?,
        section: row.try_get("section")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
        dob: row.try_get("dob")?,
        parent_name: row.try_get("parent_name")?,
        parent_phone: row.try_get("parent_phone")?,
    })
}

impl StudentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// List all students ordered by year, section, then name
    pub async fn list_students(&self) -> Result<Vec<Student>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM students
            ORDER BY year, section, name
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(student_from_row).collect()
    }

    /// Get a student by USN
    pub async fn get_student(&self, usn: &str) -> Result<Option<Student>, sqlx::Error> {
        let row = sqlx::query("SELECT * FROM students WHERE usn = ?")
            .bind(usn)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(student_from_row).transpose()
    }

    /// Insert a student and return the stored row
    pub async fn create_student(&self, request: &CreateStudentRequest) -> Result<Student, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO students (usn, name, year, section, email, phone, address, dob, parent_name, parent_phone)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&request.usn)
        .bind(&request.name)
        .bind(request.year)
        .bind(&request.section)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(&request.dob)
        .bind(&request.parent_name)
        .bind(&request.parent_phone)
        .fetch_one(self.db.pool())
        .await?;

        student_from_row(&row)
    }

    /// Replace every mutable field of the student; `None` when no row matched
    pub async fn update_student(
        &self,
        usn: &str,
        request: &UpdateStudentRequest,
    ) -> Result<Option<Student>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            UPDATE students
            SET name = ?, email = ?, phone = ?, year = ?, section = ?,
                address = ?, dob = ?, parent_name = ?, parent_phone = ?
            WHERE usn = ?
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.year)
        .bind(&request.section)
        .bind(&request.address)
        .bind(&request.dob)
        .bind(&request.parent_name)
        .bind(&request.parent_phone)
        .bind(usn)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(student_from_row).transpose()
    }

    /// Delete a student, returning the removed row; `None` when no row matched
    pub async fn delete_student(&self, usn: &str) -> Result<Option<Student>, sqlx::Error> {
        let row = sqlx::query("DELETE FROM students WHERE usn = ? RETURNING *")
            .bind(usn)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(student_from_row).transpose()
    }
}
