//! Loaders turning input files into an ordered list of reads.
//!
//! This module provides parsers for:
//!
//! - **Plain read files**: one sequence per line (`.txt` or anything else)
//! - **FASTA files**: one read per record, optionally gzip/bgzip compressed
//!
//! Input order is preserved; the assembler seeds from the first read and
//! breaks overlap ties by position.
//!
//! ## Example
//!
//! ```rust,no_run
//! use greedy_assembler::parsing::{fasta, reads};
//! use std::path::Path;
//!
//! let from_lines = reads::parse_reads_file(Path::new("my_reads.txt")).unwrap();
//! let from_fasta = fasta::parse_fasta_file(Path::new("my_reads.fa.gz")).unwrap();
//! ```

pub mod fasta;
pub mod reads;

pub use reads::ParseError;
