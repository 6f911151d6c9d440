//! Allow-list configuration errors.

use thiserror::Error;

/// A single problem with one allow-list entry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AllowListViolation {
    #[error("Entry {index} allows '{state}' -> '{state}'; requests for the current state never transition")]
    SelfTransition { index: usize, state: String },

    #[error("Entry {index} targets the null state from '{from}'; the null state is initial only")]
    IntoNullState { index: usize, from: String },
}

/// Errors that can occur when loading an allow-list
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be parsed
    #[error("Failed to parse allow-list: {0}")]
    Parse(String),

    /// The document could not be written
    #[error("Failed to serialize allow-list: {0}")]
    Serialize(String),

    /// One or more entries are invalid
    #[error("Allow-list has {} invalid entries", .violations.len())]
    Invalid { violations: Vec<AllowListViolation> },
}
