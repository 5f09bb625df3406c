//! Fixtures shared by the repository tests.

use shared::{
    Class, CreateClassRequest, CreateFacultyRequest, CreateStudentRequest, CreateSubjectRequest,
    Faculty, Student, Subject,
};

use super::connection::DbConnection;
use super::repositories::{ClassRepository, FacultyRepository, StudentRepository, SubjectRepository};

/// One row in each parent table, for tests that need valid foreign keys
pub struct ReferenceRows {
    pub student: Student,
    pub faculty: Faculty,
    pub subject: Subject,
    pub class: Class,
}

pub async fn seed_reference_rows(db: &DbConnection) -> ReferenceRows {
    let student = StudentRepository::new(db.clone())
        .create_student(&CreateStudentRequest {
            usn: "1RV21IS001".to_string(),
            name: "Anand".to_string(),
            year: 2,
            section: "A".to_string(),
            email: "anand@example.edu".to_string(),
            phone: "9876543210".to_string(),
            address: None,
            dob: None,
            parent_name: None,
            parent_phone: None,
        })
        .await
        .expect("Failed to create student");

    let faculty = FacultyRepository::new(db.clone())
        .create_faculty(&CreateFacultyRequest {
            name: "Dr. Rao".to_string(),
            email: "rao@example.edu".to_string(),
            phone: "9123456780".to_string(),
            designation: "Professor".to_string(),
        })
        .await
        .expect("Failed to create faculty");

    let subject = SubjectRepository::new(db.clone())
        .create_subject(&CreateSubjectRequest {
            code: "IS51".to_string(),
            name: "Databases".to_string(),
            credits: 4,
        })
        .await
        .expect("Failed to create subject");

    let class = ClassRepository::new(db.clone())
        .create_class(&CreateClassRequest {
            year: 2,
            section: "A".to_string(),
            semester: 3,
        })
        .await
        .expect("Failed to create class");

    ReferenceRows {
        student,
        faculty,
        subject,
        class,
    }
}
