//! Error types for pipeline construction

use thiserror::Error;

/// Errors raised while assembling a pipeline.
///
/// Evaluation and resolution never return errors; only startup does.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid flag catalog: {0}")]
    Flags(#[from] flagpost_flags::FlagError),

    #[error("Invalid content catalog: {0}")]
    Content(#[from] flagpost_content::ContentError),

    #[error("Configuration error: {0}")]
    Config(#[from] flagpost_config::ConfigError),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    CatalogParse(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
