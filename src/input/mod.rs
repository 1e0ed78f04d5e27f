pub mod manual;
pub mod voice;

use crate::errors::InputError;

use std::io::{BufRead, Write};


/// Line based conversation with the user
pub trait Console {
    /// Show `prompt` and return the answer without surrounding whitespace
    fn ask(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Show a message
    fn say(&mut self, message: &str) -> Result<(), InputError>;
}


/// Console over any reader / writer pair, stdin and stdout in the binary
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {

    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Prompter<R, W> {

    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
