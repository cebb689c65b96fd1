//! Filter passes over the loaded record set.
//!
//! Every pass reads the full loaded sequence and keeps matches in input
//! order. Passes never feed into each other.

use crate::record::BookRecord;

/// A single filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    /// Author equals the name, ignoring case.
    Author(String),
    /// Publisher equals the name, ignoring case.
    Publisher(String),
    /// Publication year strictly greater than the given year.
    PublishedAfter(i32),
}

impl BookFilter {
    /// Name of the pass, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            BookFilter::Author(_) => "AUTHOR",
            BookFilter::Publisher(_) => "PUBLISHER",
            BookFilter::PublishedAfter(_) => "AFTER-YEAR",
        }
    }

    /// Does this record pass the filter?
    pub fn matches(&self, record: &BookRecord) -> bool {
        match self {
            BookFilter::Author(name) => eq_ignore_case(record.author(), name),
            BookFilter::Publisher(name) => eq_ignore_case(record.publisher(), name),
            BookFilter::PublishedAfter(year) => record.publication_year() > *year,
        }
    }

    /// Select matching records, preserving their order in `records`.
    pub fn apply<'a>(&self, records: &'a [BookRecord]) -> Vec<&'a BookRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Case-insensitive equality, lowercasing one character at a time.
///
/// Per-character mapping keeps a word-final `Σ` as `σ`, which
/// `str::to_lowercase` would turn into `ς`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
