use serde::{Deserialize, Serialize};

pub mod csv_export;
pub mod table;

pub use csv_export::{
    export_filename, serialize_records, serialize_with_columns, CsvColumn, CsvExportError,
    STUDENT_EXPORT_COLUMNS,
};
pub use table::{
    CellValue, ColumnSpec, SortDirection, SortState, TableEngine, TableState, TableView,
    DEFAULT_PAGE_SIZE,
};

/// A student enrolled in the department, keyed by USN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// University seat number (natural key)
    pub usn: String,
    pub name: String,
    /// Year of study, 1 through 4
    pub year: i64,
    /// Section letter, e.g. "A"
    pub section: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    pub dob: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
}

impl Student {
    /// Human-readable year label used by the students table ("1st Year", "2nd Year", ...)
    pub fn ordinal_year_label(year: i64) -> String {
        let suffix = match (year % 10, year % 100) {
            (1, n) if n != 11 => "st",
            (2, n) if n != 12 => "nd",
            (3, n) if n != 13 => "rd",
            _ => "th",
        };
        format!("{}{} Year", year, suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub usn: String,
    #[serde(default)]
    pub name: String,
    pub year: i64,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_phone: Option<String>,
}

/// Full-row replacement of a student's mutable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    #[serde(default)]
    pub name: String,
    pub year: i64,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_phone: Option<String>,
}

impl From<Student> for UpdateStudentRequest {
    fn from(student: Student) -> Self {
        Self {
            name: student.name,
            year: student.year,
            section: student.section,
            email: student.email,
            phone: student.phone,
            address: student.address,
            dob: student.dob,
            parent_name: student.parent_name,
            parent_phone: student.parent_phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFacultyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub designation: String,
}

/// A subject offered by the department, keyed by its code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub code: String,
    pub name: String,
    pub credits: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubjectRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub credits: i64,
}

/// A class is one (year, section, semester) cohort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub year: i64,
    pub section: String,
    pub semester: i64,
}

impl Class {
    pub fn label(&self) -> String {
        format!("Year {} - Section {} (Sem {})", self.year, self.section, self.semester)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub year: i64,
    #[serde(default)]
    pub section: String,
    pub semester: i64,
}

/// Join record linking a faculty member to a subject taught in a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyAssignment {
    pub id: i64,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    pub faculty_id: i64,
    pub class_id: i64,
    #[serde(default)]
    pub subject_code: String,
}

/// Denormalized assignment row for display (names alongside codes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub id: i64,
    pub faculty_name: String,
    pub subject_name: String,
    pub subject_code: String,
    pub year: i64,
    pub section: String,
    pub semester: i64,
}

/// Marks scored by a student in a subject.
///
/// `total_marks` is computed once when the record is created and stored
/// as-is; it is never re-derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub id: i64,
    pub usn: String,
    pub subject_code: String,
    pub internal_marks: f64,
    pub external_marks: f64,
    pub total_marks: f64,
}

impl Mark {
    pub fn total_of(internal_marks: f64, external_marks: f64) -> f64 {
        internal_marks + external_marks
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMarkRequest {
    #[serde(default)]
    pub usn: String,
    #[serde(default)]
    pub subject_code: String,
    pub internal_marks: f64,
    pub external_marks: f64,
}

/// Denormalized marks row with student and subject names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkRow {
    pub id: i64,
    pub usn: String,
    pub student_name: String,
    pub subject_code: String,
    pub subject_name: String,
    pub internal_marks: f64,
    pub external_marks: f64,
    pub total_marks: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Record counts shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub student_count: i64,
    pub faculty_count: i64,
    pub subject_count: i64,
    pub class_count: i64,
}

/// Connectivity report returned by the database diagnostics endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseDiagnostics {
    pub database_connection: String,
    pub tables: Vec<String>,
    pub students_table_exists: bool,
    pub student_count: usize,
    pub student_sample: Vec<Student>,
}

/// Log line forwarded from the frontend to the backend log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Required-field check shared by the backend handlers and the frontend forms
pub trait RequiredFields {
    /// Names of required fields that are absent or blank
    fn missing_fields(&self) -> Vec<&'static str>;

    fn has_required_fields(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn collect_missing(checks: &[(&'static str, bool)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| *name)
        .collect()
}

impl RequiredFields for CreateStudentRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("usn", blank(&self.usn)),
            ("name", blank(&self.name)),
            ("year", self.year == 0),
            ("section", blank(&self.section)),
            ("email", blank(&self.email)),
            ("phone", blank(&self.phone)),
        ])
    }
}

impl RequiredFields for UpdateStudentRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("name", blank(&self.name)),
            ("year", self.year == 0),
            ("section", blank(&self.section)),
            ("email", blank(&self.email)),
            ("phone", blank(&self.phone)),
        ])
    }
}

impl RequiredFields for CreateFacultyRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("name", blank(&self.name)),
            ("email", blank(&self.email)),
            ("phone", blank(&self.phone)),
            ("designation", blank(&self.designation)),
        ])
    }
}

impl RequiredFields for CreateSubjectRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[("code", blank(&self.code)), ("name", blank(&self.name))])
    }
}

impl RequiredFields for CreateClassRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("year", self.year == 0),
            ("section", blank(&self.section)),
            ("semester", self.semester == 0),
        ])
    }
}

impl RequiredFields for CreateAssignmentRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[("subject_code", blank(&self.subject_code))])
    }
}

impl RequiredFields for CreateMarkRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("usn", blank(&self.usn)),
            ("subject_code", blank(&self.subject_code)),
        ])
    }
}

/// Treat blank optional form input as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_request() -> CreateStudentRequest {
        CreateStudentRequest {
            usn: "1XX1".to_string(),
            name: "Anand".to_string(),
            year: 2,
            section: "A".to_string(),
            email: "anand@example.edu".to_string(),
            phone: "9876543210".to_string(),
            address: None,
            dob: None,
            parent_name: None,
            parent_phone: None,
        }
    }

    #[test]
    fn test_total_of_marks() {
        assert_eq!(Mark::total_of(35.0, 55.0), 90.0);
        assert_eq!(Mark::total_of(0.0, 0.0), 0.0);
        assert_eq!(Mark::total_of(12.5, 40.0), 52.5);
    }

    #[test]
    fn test_ordinal_year_label() {
        assert_eq!(Student::ordinal_year_label(1), "1st Year");
        assert_eq!(Student::ordinal_year_label(2), "2nd Year");
        assert_eq!(Student::ordinal_year_label(3), "3rd Year");
        assert_eq!(Student::ordinal_year_label(4), "4th Year");
        assert_eq!(Student::ordinal_year_label(11), "11th Year");
    }

    #[test]
    fn test_complete_student_request_has_no_missing_fields() {
        assert!(student_request().has_required_fields());
    }

    #[test]
    fn test_blank_fields_are_reported_missing() {
        let mut request = student_request();
        request.name = "   ".to_string();
        request.year = 0;
        assert_eq!(request.missing_fields(), vec!["name", "year"]);
    }

    #[test]
    fn test_optional_student_fields_are_not_required() {
        let update = UpdateStudentRequest {
            name: "Svana".to_string(),
            year: 3,
            section: "B".to_string(),
            email: "svana@example.edu".to_string(),
            phone: "123".to_string(),
            address: None,
            dob: None,
            parent_name: None,
            parent_phone: None,
        };
        assert!(update.has_required_fields());
    }

    #[test]
    fn test_missing_json_strings_deserialize_as_blank() {
        let request: CreateSubjectRequest =
            serde_json::from_str(r#"{"code": "CS501", "credits": 4}"#).unwrap();
        assert_eq!(request.missing_fields(), vec!["name"]);
    }

    #[test]
    fn test_missing_numeric_field_is_rejected_by_serde() {
        let result = serde_json::from_str::<CreateMarkRequest>(
            r#"{"usn": "1XX1", "subject_code": "CS501", "internal_marks": 35}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  Bengaluru ".to_string())), Some("Bengaluru".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_update_request_from_student_keeps_optional_fields() {
        let student = Student {
            usn: "1XX1".to_string(),
            name: "Anand".to_string(),
            year: 2,
            section: "A".to_string(),
            email: "anand@example.edu".to_string(),
            phone: "9876543210".to_string(),
            address: Some("Mysuru".to_string()),
            dob: None,
            parent_name: Some("Ravi".to_string()),
            parent_phone: None,
        };
        let update = UpdateStudentRequest::from(student);
        assert_eq!(update.address.as_deref(), Some("Mysuru"));
        assert_eq!(update.parent_name.as_deref(), Some("Ravi"));
    }
}
