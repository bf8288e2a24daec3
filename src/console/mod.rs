//! # Console Adapter
//!
//! The stdin/stdout layer. Prints the menu, runs the retry-until-valid
//! prompts, and turns menu choices into `core::Action` values.
//!
//! This is the only module that reads input or writes output. It is
//! generic over `BufRead` + `Write`, so tests run whole sessions against
//! in-memory buffers.
//!
//! ## Error handling
//!
//! Each `SessionError` raised inside one menu round is handled explicitly:
//!
//! - `InvalidNumber`, `IndexOutOfRange`: message printed, menu shown again.
//! - `Io`: "Unexpected error: …" printed, menu shown again. If even that
//!   write fails the error is returned to the caller.
//! - `InputClosed`: the session ends as if Exit had been chosen, without the
//!   farewell banner.

mod prompt;
mod screens;

pub use prompt::Console;

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::core::action::{Action, SessionError};
use crate::core::config::ResolvedConfig;
use crate::core::state::Roster;
use crate::core::student::StudentProfile;
use crate::core::validate::{
    parse_age, parse_credits, parse_height, parse_integer, parse_level, parse_weight,
    parse_yes_no, validate_email, validate_name,
};

/// What the menu loop does after one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, roster: Roster) -> Self {
        Self {
            console: Console::new(input, output),
            roster,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    /// Runs the menu loop until Exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Session started");
        self.print(screens::welcome())?;

        loop {
            match self.round() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(SessionError::InputClosed) => {
                    info!("Input closed, ending session");
                    // Leave the dangling prompt on its own line.
                    self.print("\n")?;
                    break;
                }
                Err(e @ (SessionError::InvalidNumber | SessionError::IndexOutOfRange { .. })) => {
                    debug!("Recovered from {:?}", e);
                    self.print(format!("{e}\n"))?;
                }
                Err(SessionError::Io(e)) => {
                    warn!("I/O error during session: {}", e);
                    self.print(format!("{}\n", SessionError::Io(e)))?;
                }
            }
        }

        info!(
            "Session ended, {} students created",
            self.roster.total_created()
        );
        Ok(())
    }

    fn print(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        match self.console.show(text) {
            Ok(()) => Ok(()),
            Err(SessionError::Io(e)) => Err(e),
            Err(other) => Err(io::Error::other(other.to_string())),
        }
    }

    fn round(&mut self) -> Result<Flow, SessionError> {
        self.console.show(screens::menu())?;
        let raw = self.console.read_line(screens::MENU_PROMPT)?;

        match Action::parse(&raw)? {
            Some(Action::CreateStudent) => self.create_student()?,
            Some(Action::ListStudents) => self.list_students()?,
            Some(Action::Exit) => {
                self.console
                    .show(screens::farewell(self.roster.total_created()))?;
                return Ok(Flow::Exit);
            }
            None => {
                debug!("Menu choice {:?} is not an option", raw);
                self.console
                    .say("Invalid option! Choose between 1 and 3 please.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn create_student(&mut self) -> Result<(), SessionError> {
        let c = &mut self.console;
        c.show(screens::creating_header())?;

        let name = c.prompt_until_with("Full name: ", "Your full name: ", validate_name)?;
        let age = c.prompt_until("Enter your age: ", parse_age)?;
        let school = c.read_line("School name: ")?;
        let department = c.read_line("Department: ")?;
        let level = c.prompt_until("Enter your academic level (1-7): ", parse_level)?;
        let student_id = c.read_line("Student ID number: ")?;
        let height = c.prompt_until("Height in meters (e.g., 1.75): ", parse_height)?;
        let weight = c.prompt_until("Weight in kg: ", parse_weight)?;
        let email = c.prompt_until("University email: ", validate_email)?;

        let mut student = self.roster.new_student(StudentProfile {
            name,
            age,
            school,
            department,
            level,
            student_id,
            height,
            weight,
            email,
        });

        let c = &mut self.console;
        if c.prompt_until("Are you registered? (yes/no): ", parse_yes_no)? {
            student.register();
        }

        if c.prompt_until("Do you want to add courses? (yes/no): ", parse_yes_no)? {
            loop {
                let course_name = c.read_line("Course name: ")?;
                let credits = c.prompt_until("Number of credits: ", parse_credits)?;
                student.add_course(course_name, credits);

                if !c.prompt_until("Add another course? (yes/no): ", parse_yes_no)? {
                    break;
                }
            }
        }

        info!(
            "Created student {} ({}), level {}, {} courses",
            student.name,
            student.student_id,
            student.level,
            student.courses.len()
        );
        c.show(&student)?;
        self.roster.push(student);

        self.console.say("\n✓ Student successfully created!")?;
        self.console.say(format!(
            "Total students in system: {}",
            self.roster.total_created()
        ))?;
        Ok(())
    }

    fn list_students(&mut self) -> Result<(), SessionError> {
        if self.roster.is_empty() {
            debug!("Listing requested on an empty roster");
            self.console.say("\nNo students registered at the moment.")?;
            return Ok(());
        }

        debug!("Listing {} students", self.roster.len());
        self.console
            .show(screens::student_list(self.roster.students()))?;

        if self
            .console
            .prompt_until("\nDisplay details of a student? (yes/no): ", parse_yes_no)?
        {
            let prompt = format!("Student number (1-{}): ", self.roster.len());
            let raw = self.console.read_line(&prompt)?;
            let number = parse_integer(&raw).map_err(|_| SessionError::InvalidNumber)?;
            let student = self.roster.get(number)?;
            debug!("Showing details for student #{}", number);
            self.console.show(student)?;
        }
        Ok(())
    }
}

/// Runs an interactive session on the process's stdin and stdout.
pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        Roster::new(config.school_year),
    );
    session.run()
}
