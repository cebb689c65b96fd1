//! Reading book records from a delimited text file.
//!
//! Each non-empty line is one record: `id,title,author,publisher,year,pages,price`.
//! Lines that do not split into seven fields are skipped without error.
//! A seven-field line with a bad number fails the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::BookError;
use crate::record::BookRecord;

/// Load all records from the file at `path`.
///
/// The file is closed before this returns, on success or error.
pub fn load_records(path: &Path) -> Result<Vec<BookRecord>, BookError> {
    let file = File::open(path).map_err(|source| BookError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(BufReader::new(file)).map_err(|e| match e {
        BookError::Io(source) => BookError::Read {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    debug!(path = %path.display(), count = records.len(), "loaded book records");
    Ok(records)
}

/// Parse records from any buffered reader, preserving line order.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the load. Read failures surface as [`BookError::Io`];
/// [`load_records`] rewraps them with the file path.
pub fn read_records<R: BufRead>(mut reader: R) -> Result<Vec<BookRecord>, BookError> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.is_empty() {
            continue;
        }

        let line = String::from_utf8_lossy(raw);
        match BookRecord::from_line(&line, line_number)? {
            Some(record) => records.push(record),
            None => debug!(line = line_number, "skipping line without 7 fields"),
        }
    }

    Ok(records)
}
