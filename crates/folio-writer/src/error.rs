//! Error types for result persistence

use thiserror::Error;

/// Errors that can occur while writing a document artifact
#[derive(Error, Debug)]
pub enum WriterError {
    /// Filesystem failure creating directories or writing the artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be serialized to JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
