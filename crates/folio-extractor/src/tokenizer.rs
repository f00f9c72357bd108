//! Paragraph segmentation and stem-frequency filtering

use crate::config::ExtractorConfig;
use folio_domain::traits::Stemmer;
use folio_domain::{Paragraph, WordCounts};
use folio_vocab::Whitelist;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Trailing punctuation run: Unicode punctuation plus the ASCII symbol
// characters ($+<=>^`|~) the POSIX punct class folds in. Source texts use
// typographic quotes, em-dashes, and ellipses, not just ASCII marks.
static TRAILING_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{P}$+<=>^`|~]+$").expect("trailing punctuation pattern is valid")
});

/// Splits a cleaned body into paragraphs and computes filtered stem counts.
///
/// The tokenizer owns a stemmer and its configuration; the whitelist is
/// passed by reference per call so one whitelist can serve a whole run.
pub struct ParagraphTokenizer<S: Stemmer> {
    stemmer: S,
    config: ExtractorConfig,
}

impl<S: Stemmer> ParagraphTokenizer<S> {
    /// Create a tokenizer from a stemmer and configuration
    pub fn new(stemmer: S, config: ExtractorConfig) -> Self {
        Self { stemmer, config }
    }

    /// Split a cleaned body on blank-line boundaries and keep each candidate
    /// whose whitelisted occurrence total reaches `min_words`.
    ///
    /// Retained paragraphs preserve source order; discarded candidates leave
    /// no trace in the output.
    pub fn tokenize(&self, body: &str, whitelist: &Whitelist) -> Vec<Paragraph> {
        let paragraphs: Vec<Paragraph> = body
            .split("\n\n")
            .filter_map(|candidate| self.tokenize_candidate(candidate, whitelist))
            .collect();

        debug!("Retained {} paragraphs", paragraphs.len());

        paragraphs
    }

    fn tokenize_candidate(&self, candidate: &str, whitelist: &Whitelist) -> Option<Paragraph> {
        let mut words = WordCounts::new();

        // Whitespace collapsing here is a counting-only pass; the retained
        // text is normalized separately below.
        for word in candidate.split_whitespace() {
            // Strip a trailing punctuation run only: interior punctuation
            // (contractions, hyphenations) stays part of the token.
            let stripped = TRAILING_PUNCT.replace(word, "");
            if stripped.is_empty() {
                continue;
            }

            let stem = self.stemmer.stem(&stripped.to_lowercase());
            if whitelist.contains(&stem) {
                words.increment(&stem);
            }
        }

        if (words.total() as usize) < self.config.min_words {
            return None;
        }

        Some(Paragraph::new(normalize_text(candidate), words))
    }
}

/// Newlines to single spaces, whitespace runs collapsed, ends trimmed.
fn normalize_text(candidate: &str) -> String {
    candidate.split_whitespace().collect::<Vec<_>>().join(" ")
}
