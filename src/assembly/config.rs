use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::validation::{validate_error_rate, ValidationError};

/// Minimum overlap, in symbols, a read needs to be fused into the contig
pub const DEFAULT_MIN_OVERLAP: usize = 8;

/// Errors loading an assembly configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Configuration for the greedy assembler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblyConfig {
    /// Fraction of mismatched symbols tolerated inside an overlap.
    /// `0.0` selects exact matching.
    pub error_rate: f64,

    /// Overlap a candidate must reach to be fused
    pub min_overlap: usize,

    /// Threads used to score candidates within one step.
    /// `1` scores sequentially, `0` uses every available core.
    pub threads: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            error_rate: 0.0,
            min_overlap: DEFAULT_MIN_OVERLAP,
            threads: 1,
        }
    }
}

impl AssemblyConfig {
    #[must_use]
    pub fn with_error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = error_rate;
        self
    }

    #[must_use]
    pub fn with_min_overlap(mut self, min_overlap: usize) -> Self {
        self.min_overlap = min_overlap;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// True when overlaps are computed without tolerating mismatches
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.error_rate == 0.0
    }

    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ErrorRateOutOfRange` if the error rate is
    /// outside `[0, 1]`, or `ValidationError::ZeroMinOverlap` if the
    /// threshold is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_error_rate(self.error_rate)?;
        if self.min_overlap == 0 {
            return Err(ValidationError::ZeroMinOverlap);
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the text is not a valid configuration,
    /// or `ConfigError::Invalid` if a value is out of range.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, or the errors of
    /// [`AssemblyConfig::from_json`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssemblyConfig::default();
        assert_eq!(config.min_overlap, 8);
        assert!(config.is_exact());
        assert_eq!(config.threads, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            AssemblyConfig::default().with_error_rate(1.2).validate(),
            Err(ValidationError::ErrorRateOutOfRange(1.2))
        );
        assert_eq!(
            AssemblyConfig::default().with_min_overlap(0).validate(),
            Err(ValidationError::ZeroMinOverlap)
        );
    }

    #[test]
    fn test_from_json_partial() {
        let config = AssemblyConfig::from_json(r#"{"error_rate": 0.1}"#).unwrap();
        assert!((config.error_rate - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.min_overlap, DEFAULT_MIN_OVERLAP);
        assert!(!config.is_exact());
    }

    #[test]
    fn test_from_json_rejects_unknown_and_invalid() {
        assert!(matches!(
            AssemblyConfig::from_json(r#"{"max_overlap": 3}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            AssemblyConfig::from_json(r#"{"error_rate": 3.0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp = NamedTempFile::with_suffix(".json").unwrap();
        temp.write_all(br#"{"min_overlap": 12, "threads": 4}"#)
            .unwrap();
        temp.flush().unwrap();

        let config = AssemblyConfig::load_from_file(temp.path()).unwrap();
        assert_eq!(config.min_overlap, 12);
        assert_eq!(config.threads, 4);
    }
}
