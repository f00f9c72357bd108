//! Folio Extractor
//!
//! Converts one raw archived text into filtered paragraph records.
//!
//! # Overview
//!
//! Project Gutenberg texts carry licensing boilerplate around the actual
//! body, bracketed by standardized start/end banner lines. The extractor
//! locates those boundaries in the raw bytes, repairs the encoding, strips
//! the banner, and hands the cleaned body to the tokenizer, which splits it
//! into paragraphs and reduces each paragraph to whitelisted stem counts.
//!
//! # Architecture
//!
//! ```text
//! raw bytes → BoundaryExtractor → cleaned body
//!           → ParagraphTokenizer (whitelist, stemmer) → Vec<Paragraph>
//! ```
//!
//! # Example Usage
//!
//! ```
//! use folio_extractor::{BoundaryExtractor, ExtractorConfig, ParagraphTokenizer};
//! use folio_vocab::{SnowballStemmer, Whitelist};
//!
//! # fn example() -> Result<(), folio_extractor::ExtractError> {
//! let raw = b"noise\n*** START OF THE PROJECT GUTENBERG EBOOK ***\n\n\
//!             Hello world.\n\n*** END OF THE PROJECT GUTENBERG EBOOK";
//!
//! let body = BoundaryExtractor::extract(raw)?;
//!
//! let whitelist: Whitelist = ["hello", "world"].iter().map(|s| s.to_string()).collect();
//! let tokenizer = ParagraphTokenizer::new(SnowballStemmer::english(), ExtractorConfig::default());
//! let paragraphs = tokenizer.tokenize(&body, &whitelist);
//!
//! assert_eq!(paragraphs[0].text, "Hello world.");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod boundary;
mod config;
mod error;
mod tokenizer;

pub use boundary::BoundaryExtractor;
pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use tokenizer::ParagraphTokenizer;
