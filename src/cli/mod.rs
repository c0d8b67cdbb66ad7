//! Command-line interface for greedy-assembler.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **assemble**: Assemble a reads file into a single contig
//! - **overlap**: Report the overlap between a contig and a read
//!
//! ## Usage
//!
//! ```text
//! # Exact assembly of a file with one read per line
//! greedy-assembler assemble my_reads.txt
//!
//! # Tolerate up to 5% mismatches inside overlaps
//! greedy-assembler assemble my_reads.txt --error-rate 0.05
//!
//! # FASTA input, JSON output
//! greedy-assembler assemble reads.fa.gz --format json
//!
//! # Inspect a single overlap
//! greedy-assembler overlap AAAAAAAAABCDEFGH ABCDEFGHJJJJJJJJJ
//! ```

use clap::{Parser, Subcommand};

pub mod assemble;
pub mod overlap;

#[derive(Parser)]
#[command(name = "greedy-assembler")]
#[command(version)]
#[command(about = "Assemble overlapping reads into a single contig")]
#[command(
    long_about = "greedy-assembler builds one contig from a set of overlapping reads.\n\nStarting from the first read, it repeatedly fuses the read with the longest suffix/prefix overlap with the contig, until no read overlaps by at least the threshold (8 symbols by default). Overlaps may tolerate a fraction of mismatched symbols with --error-rate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble reads into a single contig
    Assemble(assemble::AssembleArgs),

    /// Compute the overlap between a contig and a read
    Overlap(overlap::OverlapArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Fasta,
}
