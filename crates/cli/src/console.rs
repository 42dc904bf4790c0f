use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::validate::{InputError, parse_non_empty, parse_positive_integer};

/// Line-oriented operator console.
///
/// Generic over its streams so sessions can be scripted in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one raw line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line)
    }

    /// Re-prompt until the trimmed answer is non-empty.
    pub fn non_empty(&mut self, prompt: &str) -> Result<String, CliError> {
        self.retry(prompt, parse_non_empty)
    }

    /// Re-prompt until the answer is an integer greater than zero.
    pub fn positive_integer(&mut self, prompt: &str) -> Result<u64, CliError> {
        self.retry(prompt, parse_positive_integer)
    }

    fn retry<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, CliError> {
        loop {
            let raw = self.ask(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(reason = ?err, "input rejected");
                    self.say(format!("❌ Error: {err}"))?;
                }
            }
        }
    }
}
