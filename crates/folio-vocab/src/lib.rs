//! Folio Vocabulary
//!
//! Builds and persists the vocabulary filter: the whitelist of stems that
//! are allowed to contribute to paragraph word counts.
//!
//! # Overview
//!
//! The whitelist is a system dictionary reduced to stems, minus stop-word
//! stems. Building it is comparatively expensive (one stemming call per
//! dictionary word), so the resulting set is persisted to a side file - one
//! stem per line - and later runs load that file directly with no
//! re-stemming.
//!
//! # Architecture
//!
//! ```text
//! /usr/share/dict/words → stem → (minus StopWordSet) → whitelist.txt
//! ```
//!
//! The whitelist is constructed once by the orchestrator and passed by
//! reference into tokenization; nothing here holds process-global state.

#![warn(missing_docs)]

mod error;
mod stemmer;
mod stopwords;
mod whitelist;

pub use error::VocabError;
pub use stemmer::SnowballStemmer;
pub use stopwords::{StopWordSet, STOP_WORDS};
pub use whitelist::Whitelist;
