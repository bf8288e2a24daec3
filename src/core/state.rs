//! # Roster
//!
//! Session state: every record created during the run plus the running
//! creation count.
//!
//! ```text
//! Roster
//! ├── students: Vec<Student>   // insertion order
//! ├── total_created: u64       // +1 per new_student(), never decremented
//! └── school_year: i32         // stamped on each new record
//! ```
//!
//! The console owns exactly one `Roster` and passes it around by reference.

use log::info;

use crate::core::action::SessionError;
use crate::core::student::{Student, StudentProfile};

#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
    total_created: u64,
    school_year: i32,
}

impl Roster {
    pub fn new(school_year: i32) -> Self {
        Self {
            students: Vec::new(),
            total_created: 0,
            school_year,
        }
    }

    /// Builds a record from `profile` and counts it as created. The record
    /// is not stored until `push()`.
    pub fn new_student(&mut self, profile: StudentProfile) -> Student {
        self.total_created += 1;
        Student::new(profile, self.school_year)
    }

    pub fn push(&mut self, student: Student) {
        info!(
            "Stored student {} ({}), roster size {}",
            student.name,
            student.student_id,
            self.students.len() + 1
        );
        self.students.push(student);
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Looks up a record by its 1-based position in the list.
    pub fn get(&self, number: i64) -> Result<&Student, SessionError> {
        let out_of_range = || SessionError::IndexOutOfRange {
            index: number,
            len: self.students.len(),
        };
        let index = usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(out_of_range)?;
        self.students.get(index).ok_or_else(out_of_range)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn total_created(&self) -> u64 {
        self.total_created
    }

    pub fn school_year(&self) -> i32 {
        self.school_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_profile, test_roster};

    #[test]
    fn test_roster_new_defaults() {
        let roster = test_roster();
        assert!(roster.is_empty());
        assert_eq!(roster.total_created(), 0);
        assert_eq!(roster.school_year(), 2025);
    }

    #[test]
    fn test_counter_increments_once_per_student() {
        let mut roster = test_roster();
        for expected in 1..=4 {
            let student = roster.new_student(sample_profile());
            assert_eq!(roster.total_created(), expected);
            roster.push(student);
        }
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_counter_counts_unstored_students() {
        let mut roster = test_roster();
        let _abandoned = roster.new_student(sample_profile());
        assert_eq!(roster.total_created(), 1);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_new_student_stamps_school_year() {
        let mut roster = Roster::new(2031);
        let student = roster.new_student(sample_profile());
        assert_eq!(student.creation_year, 2031);
        assert!(!student.is_registered);
        assert!(student.courses.is_empty());
    }

    #[test]
    fn test_get_is_one_based() {
        let mut roster = test_roster();
        let mut first = roster.new_student(sample_profile());
        first.name = "First".to_string();
        roster.push(first);
        let mut second = roster.new_student(sample_profile());
        second.name = "Second".to_string();
        roster.push(second);

        assert_eq!(roster.get(1).unwrap().name, "First");
        assert_eq!(roster.get(2).unwrap().name, "Second");
        assert_eq!(roster.students()[0].name, "First");
    }

    #[test]
    fn test_get_out_of_range() {
        let mut roster = test_roster();
        let student = roster.new_student(sample_profile());
        roster.push(student);

        for bad in [0, -1, 2, i64::MAX] {
            match roster.get(bad) {
                Err(SessionError::IndexOutOfRange { index, len }) => {
                    assert_eq!(index, bad);
                    assert_eq!(len, 1);
                }
                other => panic!("expected IndexOutOfRange for {bad}, got {other:?}"),
            }
        }
    }
}
