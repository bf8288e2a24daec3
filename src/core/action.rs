//! # Actions
//!
//! Every menu choice becomes an `Action`. Typing `1` is
//! `Action::CreateStudent`, `2` is `Action::ListStudents`, `3` is
//! `Action::Exit`.
//!
//! ```text
//! raw line  →  Action::parse()  →  Ok(Some(action))   dispatch
//!                               →  Ok(None)           "Invalid option!"
//!                               →  Err(InvalidNumber) "Error! Enter a valid number."
//! ```
//!
//! `SessionError` is everything the menu loop can run into. Each variant is
//! handled explicitly by the console; there is no catch-all.

use std::fmt;
use std::io;

use crate::core::validate::parse_integer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateStudent,
    ListStudents,
    Exit,
}

impl Action {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Action::CreateStudent),
            2 => Some(Action::ListStudents),
            3 => Some(Action::Exit),
            _ => None,
        }
    }

    /// Parses a menu line. Integers outside the menu yield `Ok(None)`.
    pub fn parse(raw: &str) -> Result<Option<Self>, SessionError> {
        let choice = parse_integer(raw).map_err(|_| SessionError::InvalidNumber)?;
        Ok(Self::from_choice(choice))
    }
}

#[derive(Debug)]
pub enum SessionError {
    /// A menu choice or student number that is not an integer.
    InvalidNumber,
    /// A 1-based student number outside the roster.
    IndexOutOfRange { index: i64, len: usize },
    /// Standard input reached end of file.
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidNumber => write!(f, "Error! Enter a valid number."),
            SessionError::IndexOutOfRange { .. } => write!(f, "The number is invalid!"),
            SessionError::InputClosed => write!(f, "input closed"),
            SessionError::Io(e) => write!(f, "Unexpected error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}
