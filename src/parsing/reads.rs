//! Parser for plain read files: one sequence per line.

use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::core::fragment::Fragment;
use crate::utils::validation::{check_read_limit, MAX_READS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid read file format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many reads: {0} exceeds maximum allowed ({MAX_READS})")]
    TooManyReads(usize),
}

/// Parse a file with one read per line
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::InvalidFormat`
/// if no reads are found, or `ParseError::TooManyReads` if the limit is exceeded.
pub fn parse_reads_file(path: &Path) -> Result<Vec<Fragment>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_reads_reader(BufReader::new(file))
}

/// Parse reads from raw text
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no reads are found, or
/// `ParseError::TooManyReads` if the limit is exceeded.
pub fn parse_reads_text(text: &str) -> Result<Vec<Fragment>, ParseError> {
    parse_reads_reader(text.as_bytes())
}

/// Parse reads from any buffered reader, one per line, preserving order.
///
/// Trailing whitespace (including `\r`) is stripped. Blank lines are skipped.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, `ParseError::InvalidFormat` if no
/// reads are found, or `ParseError::TooManyReads` if the limit is exceeded.
pub fn parse_reads_reader<R: BufRead>(reader: R) -> Result<Vec<Fragment>, ParseError> {
    let mut reads = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let sequence = line.trim_end();

        if sequence.is_empty() {
            warn!(line = line_number + 1, "Skipping blank line");
            continue;
        }

        // Check read limit for DOS protection
        if check_read_limit(reads.len()).is_some() {
            return Err(ParseError::TooManyReads(reads.len()));
        }

        reads.push(Fragment::from(sequence));
    }

    if reads.is_empty() {
        return Err(ParseError::InvalidFormat("No reads found".to_string()));
    }

    Ok(reads)
}
