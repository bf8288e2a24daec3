//! # Student Records
//!
//! The `Student` entity and everything derived from it: BMI, academic
//! status, credit totals and the printable summary.
//!
//! ```text
//! Student
//! ├── identity: name, age, school, department, level, student_id, email
//! ├── body: height (m), weight (kg)       → calculate_bmi(), get_bmi_category()
//! ├── is_registered: bool                 → register() (false → true only)
//! ├── courses: Vec<Course>                → add_course(), total_credits()
//! └── creation_year: i32                  // stamped by the Roster
//! ```
//!
//! Records are built by `Roster::new_student()` from a fully validated
//! `StudentProfile`, so nothing in here fails.

use std::fmt;
use std::io::{self, Write};

use crate::core::render::{decimal, round_to, RULE_WIDTH};

/// Upper bounds (exclusive) of the BMI bands, checked in order.
const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    pub credits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < NORMAL_BELOW {
            BmiCategory::NormalWeight
        } else if bmi < OVERWEIGHT_BELOW {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The identity and body fields collected before a record exists.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub name: String,
    pub age: u8,
    pub school: String,
    pub department: String,
    pub level: u8,
    pub student_id: String,
    pub height: f64,
    pub weight: f64,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: u8,
    pub school: String,
    pub department: String,
    pub level: u8,
    pub student_id: String,
    pub height: f64,
    pub weight: f64,
    pub email: String,
    pub is_registered: bool,
    pub courses: Vec<Course>,
    pub creation_year: i32,
}

impl Student {
    pub fn new(profile: StudentProfile, creation_year: i32) -> Self {
        Self {
            name: profile.name,
            age: profile.age,
            school: profile.school,
            department: profile.department,
            level: profile.level,
            student_id: profile.student_id,
            height: profile.height,
            weight: profile.weight,
            email: profile.email,
            is_registered: false,
            courses: Vec::new(),
            creation_year,
        }
    }

    /// Weight over height squared, rounded to two decimals. Zero when the
    /// height would make the division meaningless.
    pub fn calculate_bmi(&self) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        round_to(self.weight / (self.height * self.height), 2)
    }

    pub fn get_bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.calculate_bmi())
    }

    pub fn calculate_age_next_year(&self) -> u32 {
        u32::from(self.age) + 1
    }

    pub fn years_at_school(&self) -> i32 {
        i32::from(self.level) - 1
    }

    /// Appends a course as given. Callers validate credits beforehand.
    pub fn add_course(&mut self, name: impl Into<String>, credits: u32) {
        self.courses.push(Course {
            name: name.into(),
            credits,
        });
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    pub fn register(&mut self) {
        self.is_registered = true;
    }

    pub fn get_status(&self) -> String {
        match self.level {
            1 => "First year".to_string(),
            2 => "Second year".to_string(),
            3 => "Third year".to_string(),
            4 => "Fourth year".to_string(),
            n => format!("Level {n}"),
        }
    }

    /// Writes the full summary to `out`.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Prints the full summary to stdout.
    pub fn display_summary(&self) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = self.write_summary(&mut lock).and_then(|()| lock.flush()) {
            log::warn!("Failed to print summary for {}: {}", self.student_id, e);
        }
    }
}

/// The multi-section summary block, starting with a blank line.
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "           STUDENT SUMMARY")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Full name: {}", self.name)?;
        writeln!(f, "Current age: {} years old", self.age)?;
        writeln!(f, "Age next year: {} years old", self.calculate_age_next_year())?;
        writeln!(f, "School: {}", self.school)?;
        writeln!(f, "Department: {}", self.department)?;
        writeln!(f, "Level: {} ({})", self.level, self.get_status())?;
        writeln!(f, "Student ID: {}", self.student_id)?;
        writeln!(f, "Email: {}", self.email)?;
        let status = if self.is_registered {
            "Registered"
        } else {
            "Not registered"
        };
        writeln!(f, "Status: {status}")?;

        writeln!(f, "{light}")?;
        writeln!(f, "Height: {} m", decimal(self.height))?;
        writeln!(f, "Weight: {} kg", decimal(self.weight))?;
        writeln!(f, "BMI: {}", decimal(self.calculate_bmi()))?;
        writeln!(f, "BMI Category: {}", self.get_bmi_category())?;

        writeln!(f, "{light}")?;
        writeln!(f, "Years already spent: {}", self.years_at_school())?;
        writeln!(f, "Creation year: {}", self.creation_year)?;

        if !self.courses.is_empty() {
            writeln!(f, "{light}")?;
            writeln!(f, "ENROLLED COURSES:")?;
            for (i, course) in self.courses.iter().enumerate() {
                writeln!(f, "  {}. {} - {} credits", i + 1, course.name, course.credits)?;
            }
            writeln!(f, "Total credits: {}", self.total_credits())?;
        }

        writeln!(f, "{heavy}")
    }
}
