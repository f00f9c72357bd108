//! Document result module - the unit of output

use crate::Paragraph;
use serde::{Deserialize, Serialize};

/// The parsed form of one source text: an identifier plus its ordered,
/// retained paragraphs.
///
/// The identifier is opaque to the pipeline; the orchestrator derives it from
/// the source directory name and uses it only for output naming. A
/// DocumentResult is created per source text, serialized once, then dropped -
/// no state is retained across documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Identifier derived from the source directory/archive name
    pub id: String,

    /// Retained paragraphs in source order
    pub paragraphs: Vec<Paragraph>,
}

impl DocumentResult {
    /// Create a result from an identifier and retained paragraphs
    pub fn new(id: impl Into<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            id: id.into(),
            paragraphs,
        }
    }

    /// Whether no paragraphs survived filtering
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordCounts;

    #[test]
    fn test_json_roundtrip_preserves_structure() {
        let mut words = WordCounts::new();
        words.increment("hello");
        words.increment("world");

        let result = DocumentResult::new(
            "12345",
            vec![Paragraph::new("Hello world.", words)],
        );

        let json = serde_json::to_string_pretty(&result).unwrap();
        let parsed: DocumentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }

    #[test]
    fn test_empty_result() {
        let result = DocumentResult::new("empty", Vec::new());
        assert!(result.is_empty());
    }
}
