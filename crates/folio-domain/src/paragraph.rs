//! Paragraph module - the unit of retained body text

use crate::WordCounts;
use serde::{Deserialize, Serialize};

/// A retained paragraph of a cleaned document body.
///
/// `text` is the paragraph with newlines converted to single spaces, internal
/// whitespace collapsed, and leading/trailing whitespace trimmed. `words`
/// holds the whitelisted stem frequencies computed from a separate
/// normalization pass; unlisted stems are discarded entirely and never appear
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Normalized paragraph text
    pub text: String,

    /// Whitelisted stem → occurrence count
    pub words: WordCounts,
}

impl Paragraph {
    /// Create a paragraph from its normalized text and counts
    pub fn new(text: impl Into<String>, words: WordCounts) -> Self {
        Self {
            text: text.into(),
            words,
        }
    }
}
