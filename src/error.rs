//! Unified error types for the roster utility.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Errors while reading the backing roster file.
///
/// A malformed numeric field aborts the whole load rather than skipping the
/// row. That is the documented contract of the table reader: one bad number
/// means the file can no longer be trusted as a table.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    /// A row field that must be numeric failed to parse.
    BadNumber {
        /// 1-based line number in the backing file.
        line: usize,
        /// Column name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::BadNumber { line, field, value } => {
                write!(f, "line {line}: field `{field}` is not a number: `{value}`")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl LoadError {
    /// True when the error means the backing file simply does not exist.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

// ---------------------------------------------------------------------------
// RegistrationError
// ---------------------------------------------------------------------------

/// Errors that abort an interactive registration.
#[derive(Debug)]
pub enum RegistrationError {
    /// Admission year outside the accepted range.
    YearOutOfRange(i32),
    /// Course number outside the accepted range.
    CourseOutOfRange(i32),
    /// A numeric field received non-numeric input.
    NotANumber { field: &'static str, value: String },
    /// The input source ended before all fields were collected.
    InputClosed,
    /// Appending the new row to the backing file failed.
    Io(std::io::Error),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearOutOfRange(year) => write!(f, "admission year out of range: {year}"),
            Self::CourseOutOfRange(course) => write!(f, "course out of range: {course}"),
            Self::NotANumber { field, value } => {
                write!(f, "field `{field}` is not a number: `{value}`")
            }
            Self::InputClosed => write!(f, "input closed mid-registration"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for RegistrationError {}

impl From<std::io::Error> for RegistrationError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
