//! Core sequence types.
//!
//! - [`Fragment`]: one immutable input read
//! - [`Contig`]: the consensus sequence built from fused reads
//! - [`Sequence`]: shared access to the raw symbols of either
//!
//! Symbols are bytes. Reads are typically nucleotides, but any byte alphabet
//! works; comparisons are exact and case-sensitive.

pub mod contig;
pub mod fragment;
pub mod sequence;

pub use contig::Contig;
pub use fragment::Fragment;
pub use sequence::Sequence;
