//! Error types.

use thiserror::Error;

/// Errors produced by the catalog, the sorting engine and the ranking runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The identifier is not one of the six catalogued algorithms.
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// A [`RankingConfig`](crate::ranking::RankingConfig) failed validation.
    #[error("invalid ranking config: {0}")]
    InvalidConfig(String),

    /// A student record failed validation.
    #[error("invalid student '{roll_number}': {reason}")]
    InvalidStudent { roll_number: String, reason: String },

    /// A roster already holds a student with this roll number.
    #[error("duplicate roll number '{0}'")]
    DuplicateRollNumber(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RankError>;
