//! Error types for vocabulary construction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or loading the whitelist
#[derive(Error, Debug)]
pub enum VocabError {
    /// No persisted whitelist and the system dictionary cannot be read.
    /// Fatal to the run: nothing can be filtered without a vocabulary.
    #[error("dictionary unavailable at {path}: {source}")]
    DictionaryUnavailable {
        /// Path of the dictionary that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Reading or writing the persisted whitelist file failed
    #[error("whitelist file error at {path}: {source}")]
    WhitelistIo {
        /// Path of the whitelist file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}
