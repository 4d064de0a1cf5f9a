//! Error types for flag catalogs

use thiserror::Error;

/// Errors raised while building a flag catalog.
///
/// Evaluation itself never fails; these only surface when catalog data is
/// malformed.
#[derive(Debug, Error)]
pub enum FlagError {
    /// Flag has an empty variation list
    #[error("Flag '{0}' has no variations")]
    NoVariations(String),

    /// Default variation does not index into the variation list
    #[error("Flag '{key}' default variation {index} is out of range (0..{len})")]
    DefaultOutOfRange { key: String, index: usize, len: usize },

    /// Two flags share a key
    #[error("Duplicate flag key: {0}")]
    DuplicateKey(String),

    /// Flag key is empty
    #[error("Flag key cannot be empty")]
    EmptyKey,
}

pub type Result<T> = std::result::Result<T, FlagError>;
