//! CLI tool to filter a book list by author, publisher and year.
//!
//! Usage:
//!   book-filter [books.data]
//!
//! Without a file argument (or `BOOKS_FILE`), the path is asked for on stdin.

use books_rs::{BookError, ConsoleInput, Style, run};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter a comma-delimited book list by author, publisher and year.
///
/// Each line of the file is `id,title,author,publisher,year,pages,price`.
#[derive(Parser)]
#[command(name = "book-filter", version)]
struct Cli {
    /// Book list file; prompted for when omitted
    #[arg(env = "BOOKS_FILE")]
    file: Option<PathBuf>,

    /// Log load and filter details on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print prompts and headings without ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let style = if cli.no_color {
        Style::plain()
    } else {
        Style::colored()
    };

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let mut out = io::stdout();

    match run(cli.file, &mut input, &mut out, style) {
        Ok(summary) => {
            debug!(?summary, "run complete");
        }
        Err(e) => {
            let prefix = match &e {
                BookError::Read { .. } | BookError::InvalidNumber { .. } => {
                    "Error reading the file"
                }
                _ => "Error",
            };
            eprintln!("{prefix}: {e}");
            process::exit(1);
        }
    }
}
