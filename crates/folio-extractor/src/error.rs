//! Error types for extraction

use thiserror::Error;

/// Errors that can occur while extracting a document body.
///
/// Both variants are per-document failures: the caller logs them and moves
/// on to the next document. No output is produced for a failed document.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Start and/or end boundary marker absent. Carries the byte offsets
    /// that were found so the caller can report which marker is missing.
    #[error("boundary markers not matched (start: {start:?}, end: {end:?})")]
    BoundaryNotFound {
        /// Byte offset of the start marker, if found
        start: Option<usize>,
        /// Byte offset of the end marker, if found
        end: Option<usize>,
    },

    /// The extracted region has zero length after cleanup
    #[error("document contains no data between boundary markers")]
    EmptyBody,
}
