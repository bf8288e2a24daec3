//! Line-oriented prompting over any `BufRead` + `Write` pair.

use std::fmt::Display;
use std::io::{BufRead, Write};

use log::debug;

use crate::core::action::SessionError;
use crate::core::validate::ValidationError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), SessionError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `text` as-is.
    pub fn show(&mut self, text: impl Display) -> Result<(), SessionError> {
        write!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one line, without its line terminator.
    /// End of input is reported as `SessionError::InputClosed`.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompts until `validate` accepts the line, printing each rejection.
    pub fn prompt_until<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, SessionError> {
        self.prompt_until_with(prompt, prompt, validate)
    }

    /// Like `prompt_until()`, but re-asks with `retry_prompt` after the
    /// first rejection.
    pub fn prompt_until_with<T>(
        &mut self,
        prompt: &str,
        retry_prompt: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, SessionError> {
        let mut current = prompt;
        loop {
            let raw = self.read_line(current)?;
            match validate(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected input {:?}: {:?}", raw, e);
                    self.say(&e)?;
                    current = retry_prompt;
                }
            }
        }
    }
}
