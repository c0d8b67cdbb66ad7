//! Overlap matching between a contig and candidate reads.
//!
//! - [`overlap::best_overlap`]: longest exact suffix/prefix match
//! - [`overlap::best_overlap_with_error`]: longest match with a bounded
//!   fraction of mismatched positions
//! - [`overlap::within_one_mismatch`]: standalone one-difference predicate
//!
//! ## Overlap
//!
//! For a contig `C` and a read `R`, the overlap is the largest `k` such that
//! the last `k` symbols of `C` line up with the first `k` symbols of `R`:
//!
//! ```text
//! C: AAAAAAAAABCDEFGH
//! R:          ABCDEFGHJJJJJJJJJ
//!             \______/
//!              k = 8
//! ```
//!
//! The error-tolerant variant accepts `k` when
//! `mismatches / k <= error_rate`.

pub mod overlap;

pub use overlap::{best_overlap, best_overlap_with_error};
