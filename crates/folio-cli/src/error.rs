//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Vocabulary construction failed (fatal to the run)
    #[error("Vocabulary error: {0}")]
    Vocab(#[from] folio_vocab::VocabError),

    /// Boundary extraction failed for one document
    #[error("Extraction error: {0}")]
    Extract(#[from] folio_extractor::ExtractError),

    /// Writing one document's artifact failed
    #[error("Writer error: {0}")]
    Writer(#[from] folio_writer::WriterError),

    /// Unpacking a zip archive failed
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A directory contained no archive to unpack
    #[error("No archive found in {0}")]
    MissingArchive(PathBuf),

    /// An unpacked archive contained no text file
    #[error("No text file found in archive from {0}")]
    MissingTextFile(PathBuf),
}
