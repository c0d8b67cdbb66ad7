use serde::Serialize;

use crate::core::sequence::Sequence;

/// A single input read.
///
/// Fragments are immutable once built; the assembler moves them out of the
/// candidate pool when they are fused into a contig.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fragment {
    #[serde(serialize_with = "serialize_symbols")]
    sequence: Vec<u8>,
}

impl Fragment {
    pub fn new(sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            sequence: sequence.into(),
        }
    }

    /// Consume the fragment, returning its symbols
    #[must_use]
    pub fn into_sequence(self) -> Vec<u8> {
        self.sequence
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Sequence for Fragment {
    fn sequence(&self) -> &[u8] {
        &self.sequence
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.sequence))
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

pub(crate) fn serialize_symbols<S: serde::Serializer>(
    symbols: &[u8],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(symbols))
}
