//! Error types for lepigallery.
//!
//! Data-quality problems (unextractable fields, missing URLs, malformed
//! fragments) are never errors; they degrade to sentinel values. Only
//! structurally unusable input surfaces here.

/// Error type for page parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was not usable as an HTML page at all.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// Character encoding detection or conversion failed.
    #[error("Encoding detection failed: {0}")]
    Encoding(String),
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
