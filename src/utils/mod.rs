//! Shared helpers: parameter validation, checksums, and display formatting.

pub mod format;
pub mod validation;
