//! # greedy-assembler
//!
//! A library for assembling a single contig from overlapping reads.
//!
//! Given an ordered set of reads, the assembler seeds a contig with the first
//! read and then repeatedly fuses the read whose prefix best overlaps the
//! contig's suffix. It stops when no remaining read overlaps by at least the
//! threshold (8 symbols by default). This is a greedy heuristic: it does not
//! build an overlap graph and makes no claim of a globally optimal assembly.
//!
//! ## Features
//!
//! - **Exact overlaps**: linear-time longest suffix/prefix match
//! - **Error-tolerant overlaps**: accept a bounded fraction of mismatches
//! - **Deterministic selection**: ties go to the earliest read, also when
//!   candidates are scored in parallel
//! - **Fusion log**: every step records the chosen read and splice point
//!
//! ## Example
//!
//! ```rust
//! use greedy_assembler::{AssemblyConfig, GreedyAssembler, Sequence};
//! use greedy_assembler::parsing::reads::parse_reads_text;
//!
//! let reads = parse_reads_text("AAAAAAAAABCDEFGH\nABCDEFGHJJJJJJJJJ\n").unwrap();
//!
//! let assembler = GreedyAssembler::new(AssemblyConfig::default().with_error_rate(0.05)).unwrap();
//! let report = assembler.assemble(reads).unwrap();
//!
//! println!("Contig obtained with {} reads", report.contig.read_count());
//! print!("{}", report.contig.wrapped(60));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Fragment and contig value types
//! - [`matching`]: Exact and error-tolerant overlap matchers
//! - [`assembly`]: Greedy assembler, configuration, and report
//! - [`parsing`]: Read loaders for line-based and FASTA input
//! - [`cli`]: Command-line interface implementation

pub mod assembly;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use assembly::{AssemblyConfig, AssemblyError, AssemblyReport, GreedyAssembler};
pub use crate::core::contig::Contig;
pub use crate::core::fragment::Fragment;
pub use crate::core::sequence::Sequence;
pub use matching::overlap::{best_overlap, best_overlap_with_error};
