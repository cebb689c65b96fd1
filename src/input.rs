//! Sources of interactive answers.
//!
//! The driver asks for the file path, author, publisher and year through an
//! [`InputSource`] instead of reading stdin directly, so whole sessions can
//! be scripted in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Supplies successive answers to prompts.
pub trait InputSource {
    /// Show `prompt` and return the next line without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads answers from a buffered reader, writing prompts to `prompts`.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompts: W) -> Self {
        Self { reader, prompts }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.write_all(prompt.as_bytes())?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Canned answers, handed out in order. Prompts are recorded, not shown.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_strips_line_endings() {
        let mut shown = Vec::new();
        let mut input = ConsoleInput::new(Cursor::new("Jane Austen\r\nPenguin\n"), &mut shown);
        assert_eq!(input.next_line("a? ").unwrap().as_deref(), Some("Jane Austen"));
        assert_eq!(input.next_line("b? ").unwrap().as_deref(), Some("Penguin"));
        assert_eq!(input.next_line("c? ").unwrap(), None);
        drop(input);
        assert_eq!(String::from_utf8(shown).unwrap(), "a? b? c? ");
    }

    #[test]
    fn test_console_keeps_inner_whitespace() {
        let mut input = ConsoleInput::new(Cursor::new("  spaced  \n"), io::sink());
        assert_eq!(input.next_line("").unwrap().as_deref(), Some("  spaced  "));
    }

    #[test]
    fn test_console_empty_line_is_answer() {
        let mut input = ConsoleInput::new(Cursor::new("\n"), io::sink());
        assert_eq!(input.next_line("").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_scripted_records_prompts() {
        let mut input = ScriptedInput::new(["one"]);
        assert_eq!(input.next_line("first").unwrap().as_deref(), Some("one"));
        assert_eq!(input.next_line("second").unwrap(), None);
        assert_eq!(input.prompts(), ["first", "second"]);
        assert_eq!(input.remaining(), 0);
    }
}
