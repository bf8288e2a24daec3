//! Fixed screens: banners, the menu and the compact student list.

use std::fmt::Write;

use crate::core::render::{
    HEADER_DOTS_WIDTH, MENU_DOTS_WIDTH, MENU_WIDTH, RULE_WIDTH, WELCOME_WIDTH,
};
use crate::core::student::Student;

pub const MENU_PROMPT: &str = "\nChoose an option (1-3): ";

pub fn welcome() -> String {
    let rule = "=".repeat(WELCOME_WIDTH);
    format!("{rule}\n  WELCOME TO OUR STUDENT MANAGEMENT SYSTEM\n{rule}\n")
}

pub fn menu() -> String {
    let dots = ".".repeat(MENU_DOTS_WIDTH);
    format!(
        "{dots}\n        STUDENT CARD GENERATOR\n{dots}\n\
         1. Create a new student profile\n\
         2. Display all students\n\
         3. Exit\n\
         {}\n",
        "=".repeat(MENU_WIDTH)
    )
}

pub fn creating_header() -> String {
    let dots = ".".repeat(HEADER_DOTS_WIDTH);
    format!("{dots}\n    CREATING A NEW PROFILE\n{dots}\n")
}

/// Numbered one-block-per-record listing, in insertion order.
pub fn student_list(students: &[Student]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = write!(
        out,
        "\n{rule}\n    STUDENT LIST ({} total)\n{rule}\n",
        students.len()
    );

    for (i, student) in students.iter().enumerate() {
        let _ = write!(
            out,
            "\n--- Student #{} ---\n\
             Name: {}\n\
             ID: {}\n\
             Level: {}\n\
             Department: {}\n\
             Registered: {}\n",
            i + 1,
            student.name,
            student.student_id,
            student.level,
            student.department,
            if student.is_registered { "Yes" } else { "No" },
        );
    }
    out
}

pub fn farewell(total_created: u64) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\n   Thank you for using our system!\n   Total students created: {total_created}\n{rule}\n"
    )
}
