//! CSV serialization for table exports.
//!
//! A single encoder, `serialize_with_columns`, takes an explicit column
//! list. The server-side student export passes the fixed
//! `STUDENT_EXPORT_COLUMNS`; the generic client-side export derives the
//! columns from the first record with `serialize_records`.
//!
//! Output format:
//! - no rows → empty string (no header line)
//! - header line of column labels, then one line per row, joined by `\n`
//!   with no trailing newline
//! - every data field double-quoted, embedded quotes doubled
//! - null or missing values → `""`

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A CSV column: the header label and the record field it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvColumn<'a> {
    pub header: &'a str,
    pub key: &'a str,
}

impl<'a> CsvColumn<'a> {
    pub const fn new(header: &'a str, key: &'a str) -> Self {
        Self { header, key }
    }
}

/// Fixed column set of the student export endpoint
pub const STUDENT_EXPORT_COLUMNS: [CsvColumn<'static>; 10] = [
    CsvColumn::new("USN", "usn"),
    CsvColumn::new("Name", "name"),
    CsvColumn::new("Year", "year"),
    CsvColumn::new("Section", "section"),
    CsvColumn::new("Email", "email"),
    CsvColumn::new("Phone", "phone"),
    CsvColumn::new("Address", "address"),
    CsvColumn::new("DOB", "dob"),
    CsvColumn::new("Parent Name", "parent_name"),
    CsvColumn::new("Parent Phone", "parent_phone"),
];

#[derive(Debug)]
pub enum CsvExportError {
    /// A row did not serialize to a JSON object
    NotARecord(usize),
    Json(serde_json::Error),
    Csv(csv::Error),
    Encoding(std::string::FromUtf8Error),
}

impl fmt::Display for CsvExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvExportError::NotARecord(index) => {
                write!(f, "Row {} is not a flat record", index)
            }
            CsvExportError::Json(e) => write!(f, "Failed to serialize row: {}", e),
            CsvExportError::Csv(e) => write!(f, "Failed to write CSV: {}", e),
            CsvExportError::Encoding(e) => write!(f, "CSV output is not valid UTF-8: {}", e),
        }
    }
}

impl std::error::Error for CsvExportError {}

impl From<serde_json::Error> for CsvExportError {
    fn from(e: serde_json::Error) -> Self {
        CsvExportError::Json(e)
    }
}

impl From<csv::Error> for CsvExportError {
    fn from(e: csv::Error) -> Self {
        CsvExportError::Csv(e)
    }
}

impl From<std::string::FromUtf8Error> for CsvExportError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        CsvExportError::Encoding(e)
    }
}

fn to_records<T: Serialize>(rows: &[T]) -> Result<Vec<Map<String, Value>>, CsvExportError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match serde_json::to_value(row)? {
            Value::Object(map) => Ok(map),
            _ => Err(CsvExportError::NotARecord(index)),
        })
        .collect()
}

/// String form of a field value; integral floats print without a fraction
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

fn encode(records: &[Map<String, Value>], columns: &[CsvColumn<'_>]) -> Result<String, CsvExportError> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut header = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);
        header.write_record(columns.iter().map(|c| c.header))?;
        header.flush().map_err(csv::Error::from)?;
    }
    {
        let mut body = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);
        for record in records {
            body.write_record(columns.iter().map(|c| field_text(record.get(c.key))))?;
        }
        body.flush().map_err(csv::Error::from)?;
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    Ok(String::from_utf8(buffer)?)
}

/// Serialize `rows` using an explicit column list
pub fn serialize_with_columns<T: Serialize>(
    rows: &[T],
    columns: &[CsvColumn<'_>],
) -> Result<String, CsvExportError> {
    let records = to_records(rows)?;
    encode(&records, columns)
}

/// Serialize `rows` with headers taken from the first record's field names.
///
/// Assumes every row has the same shape as the first: fields only present
/// in later rows are dropped and fields they lack export as `""`.
pub fn serialize_records<T: Serialize>(rows: &[T]) -> Result<String, CsvExportError> {
    let records = to_records(rows)?;
    let Some(first) = records.first() else {
        return Ok(String::new());
    };
    let keys: Vec<String> = first.keys().cloned().collect();
    let columns: Vec<CsvColumn<'_>> = keys.iter().map(|k| CsvColumn::new(k, k)).collect();
    encode(&records, &columns)
}

/// Download filename for an export taken on `date`, e.g. `students-2025-06-14.csv`
pub fn export_filename(prefix: &str, date: chrono::NaiveDate) -> String {
    format!("{}-{}.csv", prefix, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Student;
    use serde_json::json;

    fn student(usn: &str, name: &str) -> Student {
        Student {
            usn: usn.to_string(),
            name: name.to_string(),
            year: 2,
            section: "A".to_string(),
            email: format!("{}@example.edu", usn.to_lowercase()),
            phone: "9876543210".to_string(),
            address: None,
            dob: Some("2004-05-17".to_string()),
            parent_name: None,
            parent_phone: None,
        }
    }

    fn read_back(text: &str) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(text.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_rows_serialize_to_empty_string() {
        let rows: Vec<Student> = Vec::new();
        assert_eq!(serialize_records(&rows).unwrap(), "");
        assert_eq!(serialize_with_columns(&rows, &STUDENT_EXPORT_COLUMNS).unwrap(), "");
    }

    #[test]
    fn test_line_count_is_rows_plus_header() {
        let rows = vec![student("1XX1", "Anand"), student("1XX2", "Svana"), student("1XX3", "Arun")];
        let text = serialize_records(&rows).unwrap();
        assert_eq!(text.split('\n').count(), rows.len() + 1);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_header_uses_first_record_keys_in_declaration_order() {
        let text = serialize_records(&[student("1XX1", "Anand")]).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "usn,name,year,section,email,phone,address,dob,parent_name,parent_phone"
        );
    }

    #[test]
    fn test_every_field_is_quoted_and_quotes_are_doubled() {
        let rows = vec![json!({"name": "a\"b", "note": "plain"})];
        let text = serialize_records(&rows).unwrap();
        assert_eq!(text, "name,note\n\"a\"\"b\",\"plain\"");
    }

    #[test]
    fn test_commas_and_newlines_stay_in_one_field() {
        let rows = vec![json!({"address": "12, MG Road\nBengaluru", "city": "BLR"})];
        let text = serialize_records(&rows).unwrap();
        let parsed = read_back(&text);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], vec!["12, MG Road\nBengaluru".to_string(), "BLR".to_string()]);
    }

    #[test]
    fn test_missing_optional_student_field_is_empty_quoted() {
        let text = serialize_with_columns(&[student("1XX1", "Anand")], &STUDENT_EXPORT_COLUMNS).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "USN,Name,Year,Section,Email,Phone,Address,DOB,Parent Name,Parent Phone"
        );
        let row = lines.next().unwrap();
        assert_eq!(
            row,
            "\"1XX1\",\"Anand\",\"2\",\"A\",\"1xx1@example.edu\",\"9876543210\",\"\",\"2004-05-17\",\"\",\"\""
        );
        assert!(!row.contains("null"));
    }

    #[test]
    fn test_heterogeneous_rows_follow_first_record_shape() {
        let rows = vec![json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4})];
        let parsed = read_back(&serialize_records(&rows).unwrap());
        assert_eq!(parsed[0], vec!["a", "b"]);
        assert_eq!(parsed[1], vec!["1", "2"]);
        assert_eq!(parsed[2], vec!["", "3"]);
    }

    #[test]
    fn test_number_and_bool_formatting() {
        let rows = vec![json!({"total": 90.0, "half": 52.5, "count": 3, "active": true, "gone": null})];
        let parsed = read_back(&serialize_records(&rows).unwrap());
        assert_eq!(parsed[1], vec!["90", "52.5", "3", "true", ""]);
    }

    #[test]
    fn test_non_record_rows_are_rejected() {
        let rows = vec![json!([1, 2, 3])];
        assert!(matches!(serialize_records(&rows), Err(CsvExportError::NotARecord(0))));
    }

    #[test]
    fn test_round_trip_through_external_reader() {
        let mut tricky = student("1XX9", "O\"Brien, Jr.");
        tricky.address = Some("Line 1\nLine 2".to_string());
        let text = serialize_with_columns(&[tricky.clone()], &STUDENT_EXPORT_COLUMNS).unwrap();
        let parsed = read_back(&text);
        assert_eq!(parsed[1][1], tricky.name);
        assert_eq!(parsed[1][6], "Line 1\nLine 2");
    }

    #[test]
    fn test_export_filename() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(export_filename("students", date), "students-2025-06-14.csv");
    }
}
