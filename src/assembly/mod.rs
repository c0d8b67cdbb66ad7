//! Greedy single-contig assembly.
//!
//! - [`GreedyAssembler`]: drives selection and fusion until no read qualifies
//! - [`AssemblyConfig`]: error rate, overlap threshold, and thread count
//! - [`AssemblyReport`]: the final contig plus a record of every fusion
//!
//! ## Algorithm
//!
//! 1. The first read seeds the contig
//! 2. Every remaining read is scored by its overlap with the contig suffix
//! 3. The read with the strictly greatest overlap wins; ties keep the
//!    earliest read
//! 4. If the winner overlaps by fewer than `min_overlap` symbols, stop
//! 5. Otherwise remove it from the pool, fuse it at its exact overlap, and
//!    repeat from step 2
//!
//! ## Example
//!
//! ```rust
//! use greedy_assembler::{AssemblyConfig, Fragment, GreedyAssembler, Sequence};
//!
//! let reads = vec![
//!     Fragment::from("AAAAAAAAABCDEFGH"),
//!     Fragment::from("ABCDEFGHJJJJJJJJJ"),
//! ];
//!
//! let assembler = GreedyAssembler::new(AssemblyConfig::default()).unwrap();
//! let report = assembler.assemble(reads).unwrap();
//!
//! assert_eq!(report.contig.to_string(), "AAAAAAAAABCDEFGHJJJJJJJJJ");
//! assert_eq!(report.contig.fusions(), 1);
//! assert_eq!(report.contig.length(), 25);
//! ```

pub mod assembler;
pub mod config;

pub use assembler::{AssemblyError, AssemblyReport, FusionStep, GreedyAssembler};
pub use config::{AssemblyConfig, DEFAULT_MIN_OVERLAP};
