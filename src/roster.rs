//! In-memory roster store.
//!
//! Owned by the running session and passed by reference to lookup and
//! registration. The backing file is the durable source of truth; the two can
//! diverge only by additive growth within one run.

use crate::record::Student;

/// Ordered in-memory sequence of student records.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Build a roster from records read out of the backing file.
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Linear case-insensitive lookup by full name; first match wins.
    ///
    /// Unicode lowercasing, so Cyrillic names fold correctly. No index: the
    /// expected roster size is tens of records.
    pub fn find(&self, full_name: &str) -> Option<&Student> {
        let needle = full_name.to_lowercase();
        self.students
            .iter()
            .find(|s| s.full_name.to_lowercase() == needle)
    }

    /// Append a freshly registered record.
    pub fn push(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Iterate records in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
