use std::io::{BufRead, Write};

use crate::error::PromptError;

/// Line-oriented source of user answers.
pub trait Prompter {
    /// Show `message` and return the answer without its line terminator.
    fn ask(&mut self, message: &str) -> Result<String, PromptError>;

    /// Like [`Prompter::ask`], for values that should not be echoed.
    fn ask_secret(&mut self, message: &str) -> Result<String, PromptError> {
        self.ask(message)
    }
}

/// Prompter over plain reader/writer pairs: piped stdin, or buffers in tests.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}
