use std::io;

use apidemo_core::LineSource;
use inquire::{InquireError, Text};

/// Terminal prompts drawn by `inquire`. Esc and Ctrl-C count as end of input.
#[derive(Debug, Default)]
pub struct InquireSource;

impl LineSource for InquireSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match Text::new(prompt.trim()).prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(InquireError::IO(err)) => Err(err),
            Err(other) => Err(io::Error::other(other)),
        }
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}
