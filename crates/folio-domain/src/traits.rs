//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::DocumentResult;
use std::path::PathBuf;

/// Deterministic word → stem normalization.
///
/// Implemented by the infrastructure layer (folio-vocab). Callers are
/// expected to pass lowercase input; the stemmer itself performs no case
/// folding.
pub trait Stemmer {
    /// Reduce a word to its canonical stem (e.g. "running" → "run")
    fn stem(&self, word: &str) -> String;
}

/// Persistence seam for parsed documents.
///
/// Implemented by the infrastructure layer (folio-writer). The caller
/// guarantees `result.paragraphs` is already filtered and ordered; the sink
/// must never leave a partial artifact behind for a failed document.
pub trait ResultSink {
    /// Error type for sink operations
    type Error;

    /// Persist one document's artifact, returning the path written
    fn write(&self, result: &DocumentResult) -> Result<PathBuf, Self::Error>;
}
