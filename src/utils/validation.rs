//! Centralized validation and helper functions.

/// Maximum number of reads accepted from a single input (DOS protection)
pub const MAX_READS: usize = 1_000_000;

/// Validation error types for assembly parameters
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Error rate must be a number between 0 and 1, got {0}")]
    ErrorRateOutOfRange(f64),
    #[error("Minimum overlap must be at least 1")]
    ZeroMinOverlap,
}

/// Validate that an error rate lies in `[0, 1]`.
///
/// NaN is rejected.
///
/// # Examples
///
/// ```
/// use greedy_assembler::utils::validation::validate_error_rate;
///
/// assert!(validate_error_rate(0.0).is_ok());
/// assert!(validate_error_rate(0.5).is_ok());
/// assert!(validate_error_rate(1.5).is_err());
/// assert!(validate_error_rate(f64::NAN).is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::ErrorRateOutOfRange` if the rate is outside
/// `[0, 1]` or not a number.
pub fn validate_error_rate(error_rate: f64) -> Result<f64, ValidationError> {
    if (0.0..=1.0).contains(&error_rate) {
        Ok(error_rate)
    } else {
        Err(ValidationError::ErrorRateOutOfRange(error_rate))
    }
}

/// Clap value parser for `--error-rate`
///
/// # Errors
///
/// Returns a message if the value is not a float or is outside `[0, 1]`.
pub fn parse_error_rate(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    validate_error_rate(value).map_err(|e| e.to_string())
}

/// Check if adding another read would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new read.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_read_limit(count: usize) -> Option<String> {
    if count >= MAX_READS {
        Some(format!(
            "Too many reads: adding another would exceed maximum of {MAX_READS}"
        ))
    } else {
        None
    }
}

/// MD5 of a sequence, computed on uppercase symbols (standard for sequence
/// checksums). Lowercase hex, 32 characters.
#[must_use]
pub fn sequence_md5(sequence: &[u8]) -> String {
    let uppercase: Vec<u8> = sequence.iter().map(u8::to_ascii_uppercase).collect();
    format!("{:x}", md5::compute(&uppercase))
}
