//! Demo data loaded at startup when `SEED_DEMO_DATA` is enabled.
//!
//! Seeding wipes every table first, so it is meant for local development only.

use shared::{
    CreateAssignmentRequest, CreateClassRequest, CreateFacultyRequest, CreateStudentRequest,
    CreateSubjectRequest, Mark,
};
use tracing::info;

use crate::error::RecordsResult;
use crate::storage::{
    AssignmentRepository, ClassRepository, DbConnection, FacultyRepository, MarkRepository,
    StudentRepository, SubjectRepository,
};

/// Children before parents, so foreign keys never block a delete
const CLEAR_ORDER: [&str; 6] = [
    "marks",
    "faculty_assignments",
    "students",
    "subjects",
    "faculty",
    "classes",
];

const CLASSES: [(i64, &str, i64); 8] = [
    (1, "A", 1),
    (1, "B", 1),
    (2, "A", 3),
    (2, "B", 3),
    (3, "A", 5),
    (3, "B", 5),
    (4, "A", 7),
    (4, "B", 7),
];

const FACULTY: [(&str, &str, &str); 8] = [
    ("Dr. Rajesh Kumar", "rajesh.kumar@ise.edu", "Professor"),
    ("Dr. Priya Singh", "priya.singh@ise.edu", "Associate Professor"),
    ("Prof. Amit Sharma", "amit.sharma@ise.edu", "Assistant Professor"),
    ("Dr. Deepa Verma", "deepa.verma@ise.edu", "Professor"),
    ("Prof. Sunil Mehta", "sunil.mehta@ise.edu", "Assistant Professor"),
    ("Dr. Neha Patel", "neha.patel@ise.edu", "Associate Professor"),
    ("Prof. Rahul Gupta", "rahul.gupta@ise.edu", "Assistant Professor"),
    ("Dr. Kavita Reddy", "kavita.reddy@ise.edu", "Professor"),
];

const SUBJECTS: [(&str, &str, i64); 12] = [
    ("21CS35", "Data Structures and Algorithms", 4),
    ("21CS36", "Database Management Systems", 4),
    ("21CS37", "Operating Systems", 3),
    ("21CS38", "Computer Networks", 4),
    ("21CS51", "Software Engineering", 3),
    ("21CS52", "Artificial Intelligence", 4),
    ("21CS53", "Web Technologies", 3),
    ("21CS54", "Machine Learning", 4),
    ("21CS71", "Cloud Computing", 3),
    ("21CS72", "Big Data Analytics", 4),
    ("21CS73", "Internet of Things", 3),
    ("21CS74", "Blockchain Technology", 3),
];

const STUDENTS: [(&str, &str, i64, &str, &str); 21] = [
    ("1SI21IS001", "Aditya Sharma", 3, "A", "aditya.s@ise.edu"),
    ("1SI21IS002", "Bhavya Reddy", 3, "A", "bhavya.r@ise.edu"),
    ("1SI21IS003", "Chetan Patel", 3, "A", "chetan.p@ise.edu"),
    ("1SI21IS004", "Divya Krishnan", 3, "A", "divya.k@ise.edu"),
    ("1SI21IS005", "Esha Mehta", 3, "A", "esha.m@ise.edu"),
    ("1SI21IS025", "Farhan Ali", 3, "B", "farhan.a@ise.edu"),
    ("1SI21IS026", "Gauri Nair", 3, "B", "gauri.n@ise.edu"),
    ("1SI21IS027", "Harish Kumar", 3, "B", "harish.k@ise.edu"),
    ("1SI21IS028", "Ishita Verma", 3, "B", "ishita.v@ise.edu"),
    ("1SI21IS029", "Jaideep Singh", 3, "B", "jaideep.s@ise.edu"),
    ("1SI20IS050", "Kavya Gupta", 4, "A", "kavya.g@ise.edu"),
    ("1SI20IS051", "Lokesh Rao", 4, "A", "lokesh.r@ise.edu"),
    ("1SI20IS052", "Meera Desai", 4, "A", "meera.d@ise.edu"),
    ("1SI20IS075", "Nikhil Joshi", 4, "B", "nikhil.j@ise.edu"),
    ("1SI20IS076", "Oviya Sundaram", 4, "B", "oviya.s@ise.edu"),
    ("1SI22IS100", "Prateek Sharma", 2, "A", "prateek.s@ise.edu"),
    ("1SI22IS101", "Qureshi Ahmed", 2, "A", "qureshi.a@ise.edu"),
    ("1SI22IS125", "Rashmi Patil", 2, "B", "rashmi.p@ise.edu"),
    ("1SI22IS126", "Sanjay Hegde", 2, "B", "sanjay.h@ise.edu"),
    ("1SI23IS150", "Tanvi Mishra", 1, "A", "tanvi.m@ise.edu"),
    ("1SI23IS175", "Uday Nair", 1, "B", "uday.n@ise.edu"),
];

/// (faculty index, class year, class section, subject index)
const ASSIGNMENTS: [(usize, i64, &str, usize); 18] = [
    (0, 3, "A", 4),
    (1, 3, "A", 5),
    (2, 3, "A", 6),
    (0, 3, "B", 4),
    (1, 3, "B", 5),
    (3, 3, "B", 6),
    (4, 2, "A", 0),
    (5, 2, "A", 1),
    (6, 2, "A", 2),
    (4, 2, "B", 0),
    (5, 2, "B", 1),
    (7, 2, "B", 2),
    (3, 4, "A", 8),
    (7, 4, "A", 9),
    (2, 4, "A", 10),
    (3, 4, "B", 8),
    (7, 4, "B", 9),
    (6, 4, "B", 10),
];

/// Subjects each study year is marked in, as a range into `SUBJECTS`
fn subjects_for_year(year: i64) -> &'static [(&'static str, &'static str, i64)] {
    match year {
        2 => &SUBJECTS[0..4],
        3 => &SUBJECTS[4..8],
        4 => &SUBJECTS[8..12],
        _ => &[],
    }
}

/// Deterministic marks in the internal 20..=40 / external 30..=60 ranges
fn demo_marks(student_index: usize, subject_index: usize) -> (f64, f64) {
    let internal = 20 + (student_index * 7 + subject_index * 3) % 21;
    let external = 30 + (student_index * 11 + subject_index * 5) % 31;
    (internal as f64, external as f64)
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedSummary {
    pub classes: usize,
    pub faculty: usize,
    pub subjects: usize,
    pub students: usize,
    pub assignments: usize,
    pub marks: usize,
}

/// Clear every table and insert the demo department
pub async fn seed_demo_data(db: &DbConnection) -> RecordsResult<SeedSummary> {
    info!("Clearing existing data");
    for table in CLEAR_ORDER {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(db.pool())
            .await?;
    }

    let mut summary = SeedSummary::default();

    let class_repo = ClassRepository::new(db.clone());
    let mut classes = Vec::with_capacity(CLASSES.len());
    for (year, section, semester) in CLASSES {
        classes.push(
            class_repo
                .create_class(&CreateClassRequest {
                    year,
                    section: section.to_string(),
                    semester,
                })
                .await?,
        );
    }
    summary.classes = classes.len();

    let faculty_repo = FacultyRepository::new(db.clone());
    let mut faculty = Vec::with_capacity(FACULTY.len());
    for (index, (name, email, designation)) in FACULTY.iter().enumerate() {
        faculty.push(
            faculty_repo
                .create_faculty(&CreateFacultyRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: format!("98765432{:02}", 10 + index),
                    designation: designation.to_string(),
                })
                .await?,
        );
    }
    summary.faculty = faculty.len();

    let subject_repo = SubjectRepository::new(db.clone());
    for (code, name, credits) in SUBJECTS {
        subject_repo
            .create_subject(&CreateSubjectRequest {
                code: code.to_string(),
                name: name.to_string(),
                credits,
            })
            .await?;
        summary.subjects += 1;
    }

    let student_repo = StudentRepository::new(db.clone());
    for (index, (usn, name, year, section, email)) in STUDENTS.iter().enumerate() {
        student_repo
            .create_student(&CreateStudentRequest {
                usn: usn.to_string(),
                name: name.to_string(),
                year: *year,
                section: section.to_string(),
                email: email.to_string(),
                phone: format!("91827364{:02}", 50 + index),
                address: None,
                dob: None,
                parent_name: None,
                parent_phone: None,
            })
            .await?;
        summary.students += 1;
    }

    let assignment_repo = AssignmentRepository::new(db.clone());
    for (faculty_index, year, section, subject_index) in ASSIGNMENTS {
        let Some(class) = classes.iter().find(|c| c.year == year && c.section == section) else {
            continue;
        };
        assignment_repo
            .create_assignment(&CreateAssignmentRequest {
                faculty_id: faculty[faculty_index].id,
                class_id: class.id,
                subject_code: SUBJECTS[subject_index].0.to_string(),
            })
            .await?;
        summary.assignments += 1;
    }

    let mark_repo = MarkRepository::new(db.clone());
    for (student_index, (usn, _, year, _, _)) in STUDENTS.iter().enumerate() {
        for (subject_index, (code, _, _)) in subjects_for_year(*year).iter().enumerate() {
            let (internal, external) = demo_marks(student_index, subject_index);
            mark_repo
                .create_mark(usn, code, internal, external, Mark::total_of(internal, external))
                .await?;
            summary.marks += 1;
        }
    }

    info!("Seeded demo data: {:?}", summary);
    Ok(summary)
}
