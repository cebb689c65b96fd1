//! The interactive load → filter → print session.
//!
//! Order of a run:
//! 1. Take the input path, prompting for it when none was supplied.
//! 2. Load every record; stop early with a notice if there are none.
//! 3. Prompt for an author, print matches.
//! 4. Prompt for a publisher, print matches.
//! 5. Prompt for a year, print books published after it.
//!
//! Each filter runs over the full loaded set.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::BookError;
use crate::filter::BookFilter;
use crate::input::InputSource;
use crate::loader::load_records;
use crate::record::BookRecord;

const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const CYAN: &str = "\u{1b}[36m";
const RESET: &str = "\u{1b}[0m";

/// Message printed when the file holds no usable records.
pub const EMPTY_NOTICE: &str = " The file contains an empty list of books.";

/// Terminal styling for prompts and headings. Records are never colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Match counts for the three filter passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCounts {
    pub by_author: usize,
    pub by_publisher: usize,
    pub after_year: usize,
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Records loaded from the file.
    pub loaded: usize,
    /// `None` when nothing was loaded and the filters were skipped.
    pub filters: Option<FilterCounts>,
}

/// Run one session.
///
/// `path` is the externally supplied input path; when absent the path is
/// read from `input`. Results go to `out`.
pub fn run<W: Write>(
    path: Option<PathBuf>,
    input: &mut dyn InputSource,
    out: &mut W,
    style: Style,
) -> Result<RunSummary, BookError> {
    let path = match path {
        Some(path) => path,
        None => PathBuf::from(ask(
            input,
            &style.paint(RED, "» Enter the path to the file: "),
            "file path",
        )?),
    };

    let books = load_records(&path)?;
    if books.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", style.paint(RED, EMPTY_NOTICE))?;
        return Ok(RunSummary {
            loaded: 0,
            filters: None,
        });
    }

    let author = ask(
        input,
        &style.paint(CYAN, "» Enter an author name to filter by: "),
        "author name",
    )?;
    let by_author = run_pass(
        &books,
        &BookFilter::Author(author),
        &style.paint(GREEN, "  Books by the given author:"),
        out,
    )?;

    let publisher = ask(
        input,
        &format!("\n{}", style.paint(CYAN, "» Enter a publisher name to filter by: ")),
        "publisher name",
    )?;
    let by_publisher = run_pass(
        &books,
        &BookFilter::Publisher(publisher),
        &style.paint(GREEN, "  Books issued by the given publisher:"),
        out,
    )?;

    let year = ask_token(
        input,
        &format!(
            "\n{}",
            style.paint(CYAN, "» Enter a year to list books published after it: ")
        ),
        "year",
    )?;
    let year = parse_year(&year)?;
    let after_year = run_pass(
        &books,
        &BookFilter::PublishedAfter(year),
        &style.paint(GREEN, "  Books published after the given year:"),
        out,
    )?;

    Ok(RunSummary {
        loaded: books.len(),
        filters: Some(FilterCounts {
            by_author,
            by_publisher,
            after_year,
        }),
    })
}

/// Parse the year from the first whitespace-separated token of `text`.
///
/// Anything after that token is ignored; a blank answer is invalid.
pub fn parse_year(text: &str) -> Result<i32, BookError> {
    let token = text.split_whitespace().next().unwrap_or("");
    token.parse().map_err(|_| BookError::InvalidYear {
        value: token.to_string(),
    })
}

/// Write each record's rendering on its own line block.
pub fn print_books<W: Write>(out: &mut W, books: &[&BookRecord]) -> Result<(), BookError> {
    for book in books {
        writeln!(out, "{book}")?;
    }
    Ok(())
}

fn ask(
    input: &mut dyn InputSource,
    prompt: &str,
    what: &'static str,
) -> Result<String, BookError> {
    input
        .next_line(prompt)?
        .ok_or(BookError::InputClosed { prompt: what })
}

/// Like [`ask`], but blank lines are skipped until one carries a token.
/// Only the first read shows the prompt.
fn ask_token(
    input: &mut dyn InputSource,
    prompt: &str,
    what: &'static str,
) -> Result<String, BookError> {
    let mut answer = ask(input, prompt, what)?;
    while answer.trim().is_empty() {
        answer = ask(input, "", what)?;
    }
    Ok(answer)
}

fn run_pass<W: Write>(
    books: &[BookRecord],
    filter: &BookFilter,
    heading: &str,
    out: &mut W,
) -> Result<usize, BookError> {
    writeln!(out, "{heading}")?;
    let selected = filter.apply(books);
    debug!(filter = filter.name(), matched = selected.len(), "filter pass");
    print_books(out, &selected)?;
    Ok(selected.len())
}
