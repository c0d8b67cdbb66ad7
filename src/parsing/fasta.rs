//! Parser for FASTA read files using noodles.
//!
//! Each record becomes one read; record names are dropped.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::warn;

use crate::core::fragment::Fragment;
use crate::parsing::reads::ParseError;
use crate::utils::validation::check_read_limit;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into reads, in record order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no reads are found, or
/// `ParseError::TooManyReads` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Fragment>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        // bgzip is a series of gzip members
        parse_fasta_reader(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        parse_fasta_reader(BufReader::new(file))
    }
}

/// Parse FASTA records from any buffered reader
///
/// # Errors
///
/// Returns `ParseError::Noodles` if parsing fails, `ParseError::InvalidFormat`
/// if no reads are found, or `ParseError::TooManyReads` if the limit is exceeded.
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<Fragment>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut reads = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let sequence = record.sequence().as_ref();
        if sequence.is_empty() {
            warn!(
                record = %String::from_utf8_lossy(record.name()),
                "Skipping empty FASTA record"
            );
            continue;
        }

        // Check read limit for DOS protection
        if check_read_limit(reads.len()).is_some() {
            return Err(ParseError::TooManyReads(reads.len()));
        }

        reads.push(Fragment::new(sequence.to_vec()));
    }

    if reads.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(reads)
}
