//! # Core Application Logic
//!
//! The record model, validation rules and session state.
//! It never reads standard input.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Student (records)    │
//!                    │  • validate (parsing)   │
//!                    │  • Roster (app data)    │
//!                    │  • Action (menu)        │
//!                    │                         │
//!                    │  No prompts. No stdin.  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │  Console   │
//!                         │  Adapter   │
//!                         │ (stdin/out)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`student`]: The `Student` record and its derived values
//! - [`validate`]: One parser per prompted field
//! - [`state`]: The `Roster`, all session data in one place
//! - [`action`]: The `Action` enum and the menu loop's `SessionError`
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod render;
pub mod state;
pub mod student;
pub mod validate;

pub use action::{Action, SessionError};
pub use state::Roster;
pub use student::{BmiCategory, Course, Student, StudentProfile};
