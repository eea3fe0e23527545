//! Backing-file table reader and appender.
//!
//! The roster persists as a UTF-8 text table. Any line containing the field
//! separator is a candidate row; header lines, dashed rules, and blank lines
//! are chrome. The file is opened and closed per operation, never held across
//! the session.

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::LoadError;
use crate::record::{Student, FIELD_SEPARATOR, HEADER_MARKER, RULE_MARKER};

/// Read the backing file into an ordered roster, preserving file order.
///
/// A missing file surfaces as `LoadError::Io` with `NotFound`; callers treat
/// that as an empty roster. A malformed numeric field aborts the whole load
/// (known fragility, kept deliberately: one bad number and the file is no
/// longer trusted as a table).
pub fn read_roster(path: &Path) -> Result<Vec<Student>, LoadError> {
    let text = fs::read_to_string(path)?;
    let students = parse_roster(&text)?;
    tracing::debug!(path = %path.display(), rows = students.len(), "roster loaded");
    Ok(students)
}

/// Parse roster text into records. Pure; used by `read_roster` and tests.
pub fn parse_roster(text: &str) -> Result<Vec<Student>, LoadError> {
    let mut students = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(student) = parse_row(line, idx + 1)? {
            students.push(student);
        }
    }
    Ok(students)
}

/// Parse one line as a data row; `Ok(None)` when the line is table chrome
/// or has fewer than five non-empty fields.
fn parse_row(line: &str, line_no: usize) -> Result<Option<Student>, LoadError> {
    if !line.contains(FIELD_SEPARATOR)
        || line.trim().is_empty()
        || line.contains(HEADER_MARKER)
        || line.contains(RULE_MARKER)
    {
        return Ok(None);
    }

    let parts: Vec<&str> = line
        .split(FIELD_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() < 5 {
        return Ok(None);
    }

    Ok(Some(Student {
        full_name: parts[0].to_string(),
        group: parts[1].to_string(),
        college: parts[2].to_string(),
        admission_year: parse_number(parts[3], "admission_year", line_no)?,
        course: parse_number(parts[4], "course", line_no)?,
    }))
}

fn parse_number(raw: &str, field: &'static str, line: usize) -> Result<i32, LoadError> {
    raw.parse().map_err(|_| LoadError::BadNumber {
        line,
        field,
        value: raw.to_string(),
    })
}

/// Append one record to the backing file, creating it when absent.
///
/// The row is written with a leading newline, matching the format the reader
/// accepts. The handle is scoped to this call.
pub fn append_student(path: &Path, student: &Student) -> Result<(), std::io::Error> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    write!(file, "\n{}", student.to_row())?;
    tracing::debug!(path = %path.display(), full_name = %student.full_name, "row appended");
    Ok(())
}
