//! # books-rs
//!
//! Loads book records from a comma-delimited text file and runs three
//! independent filter passes over them: by author, by publisher, and by
//! publication year.
//!
//! ## Input format
//!
//! One record per line, seven fields, no header:
//!
//! ```text
//! id,title,author,publisher,publicationYear,pageCount,price
//! ```
//!
//! Lines with any other field count are skipped. A seven-field line with a
//! bad number fails the load.
//!
//! ## Example
//!
//! ```
//! use books_rs::{BookFilter, BookRecord};
//!
//! let records = vec![
//!     BookRecord::from_line("1, Dune, Frank Herbert, Ace Books, 1965, 412, 9.99", 1)
//!         .unwrap()
//!         .unwrap(),
//!     BookRecord::from_line("2, Emma, Jane Austen, Penguin, 1815, 474, 7.50", 2)
//!         .unwrap()
//!         .unwrap(),
//! ];
//!
//! let result = BookFilter::Author("jane austen".to_string()).apply(&records);
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].title(), "Emma");
//! ```

pub mod driver;
pub mod error;
pub mod filter;
pub mod input;
pub mod loader;
pub mod record;

pub use driver::{EMPTY_NOTICE, FilterCounts, RunSummary, Style, parse_year, print_books, run};
pub use error::BookError;
pub use filter::BookFilter;
pub use input::{ConsoleInput, InputSource, ScriptedInput};
pub use loader::{load_records, read_records};
pub use record::{BookRecord, FIELD_COUNT};
