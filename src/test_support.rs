//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io::Cursor;

use crate::console::Session;
use crate::core::state::Roster;
use crate::core::student::{Student, StudentProfile};

/// A valid profile: 1.75 m, 70 kg, first year.
pub fn sample_profile() -> StudentProfile {
    StudentProfile {
        name: "Ada Lovelace".to_string(),
        age: 20,
        school: "Analytical Institute".to_string(),
        department: "Mathematics".to_string(),
        level: 1,
        student_id: "S-1815".to_string(),
        height: 1.75,
        weight: 70.0,
        email: "ada@example.org".to_string(),
    }
}

pub fn sample_student() -> Student {
    Student::new(sample_profile(), 2025)
}

/// An empty roster stamped with school year 2025.
pub fn test_roster() -> Roster {
    Roster::new(2025)
}

/// A session reading `script` line by line and writing into a buffer.
pub fn scripted_session(script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    Session::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        test_roster(),
    )
}

/// Everything the session has written so far.
pub fn output_of(session: &Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8_lossy(session.output()).into_owned()
}
