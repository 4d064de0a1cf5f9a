//! Error types for content catalogs

use thiserror::Error;

/// Errors raised while building a content catalog.
///
/// Resolution never fails; missing mappings and entries are reported as
/// empty results instead.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Two entries share an id
    #[error("Duplicate content entry id: {0}")]
    DuplicateEntry(String),

    /// Two mappings target the same flag
    #[error("Duplicate content mapping for flag: {0}")]
    DuplicateMapping(String),

    /// Entry id is empty
    #[error("Content entry id cannot be empty")]
    EmptyEntryId,
}

pub type Result<T> = std::result::Result<T, ContentError>;
