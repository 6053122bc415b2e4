//! Line-oriented user input for the configurator

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{BufRead, Write};

use crate::error::Result;

/// Asks the user a question and returns the trimmed answer (possibly empty)
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Interactive prompt on a real terminal
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }
}

/// Plain prompt over any reader/writer pair, used for piped stdin
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{}: ", question)?;
        self.writer.flush()?;

        // EOF reads as an empty answer
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
