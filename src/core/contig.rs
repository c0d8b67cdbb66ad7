use serde::Serialize;

use crate::core::fragment::{serialize_symbols, Fragment};
use crate::core::sequence::Sequence;

/// The growing consensus sequence.
///
/// A contig is a value: fusing a fragment produces a new contig rather than
/// modifying this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contig {
    #[serde(serialize_with = "serialize_symbols")]
    sequence: Vec<u8>,

    /// Number of fragments fused into the seed to produce this contig
    fusions: usize,
}

impl Contig {
    /// Build a contig from raw parts
    pub fn new(sequence: impl Into<Vec<u8>>, fusions: usize) -> Self {
        Self {
            sequence: sequence.into(),
            fusions,
        }
    }

    /// Seed a contig from a single fragment. No fusion has happened yet, so
    /// the counter starts at zero.
    #[must_use]
    pub fn seed(fragment: Fragment) -> Self {
        Self::new(fragment.into_sequence(), 0)
    }

    /// Number of fragments merged into the seed
    #[must_use]
    pub fn fusions(&self) -> usize {
        self.fusions
    }

    /// Number of input reads this contig was built from (seed included)
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.fusions + 1
    }

    /// Append `fragment` after skipping its first `splice` symbols.
    ///
    /// `splice` must not exceed the fragment length.
    #[must_use]
    pub(crate) fn extended(&self, fragment: &Fragment, splice: usize) -> Self {
        let tail = &fragment.sequence()[splice..];
        let mut sequence = Vec::with_capacity(self.sequence.len() + tail.len());
        sequence.extend_from_slice(&self.sequence);
        sequence.extend_from_slice(tail);
        Self::new(sequence, self.fusions + 1)
    }

    /// MD5 of the uppercase sequence, lowercase hex
    #[must_use]
    pub fn md5(&self) -> String {
        crate::utils::validation::sequence_md5(&self.sequence)
    }
}

impl Sequence for Contig {
    fn sequence(&self) -> &[u8] {
        &self.sequence
    }
}

impl std::fmt::Display for Contig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.sequence))
    }
}
