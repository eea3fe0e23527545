//! Student record model and the pipe-delimited row shape shared by the
//! table reader and the registration appender.

/// Field separator used by the backing text table.
pub const FIELD_SEPARATOR: char = '|';
/// Header marker: any line containing this column label is skipped as a header.
pub const HEADER_MARKER: &str = "ФИО";
/// Dashed-rule marker: any line containing this is skipped as table chrome.
pub const RULE_MARKER: &str = "---";

/// Earliest admission year accepted at registration.
pub const ADMISSION_YEAR_MIN: i32 = 2000;
/// Latest admission year accepted at registration.
pub const ADMISSION_YEAR_MAX: i32 = 2024;
/// Lowest course number accepted at registration.
pub const COURSE_MIN: i32 = 1;
/// Highest course number accepted at registration.
pub const COURSE_MAX: i32 = 6;

/// One student's stored attributes.
///
/// The full name doubles as the lookup key (matched case-insensitively).
/// There is no uniqueness constraint; duplicate names are allowed and lookup
/// returns the first match in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub full_name: String,
    pub group: String,
    pub college: String,
    pub admission_year: i32,
    pub course: i32,
}

impl Student {
    /// Render this record as one backing-file row, without a trailing newline.
    ///
    /// The shape matches what the table reader accepts back:
    /// `| name | group | college | year | course |`.
    pub fn to_row(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {} |",
            self.full_name, self.group, self.college, self.admission_year, self.course
        )
    }

    /// True when the admission year lies in the accepted range.
    pub fn admission_year_in_range(year: i32) -> bool {
        (ADMISSION_YEAR_MIN..=ADMISSION_YEAR_MAX).contains(&year)
    }

    /// True when the course number lies in the accepted range.
    pub fn course_in_range(course: i32) -> bool {
        (COURSE_MIN..=COURSE_MAX).contains(&course)
    }
}
