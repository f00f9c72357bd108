//! Folio Domain Layer
//!
//! This crate contains the core data model for Folio. It defines the
//! fundamental value objects that flow through the parsing pipeline and the
//! trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Paragraph**: A blank-line-delimited unit of body text together with
//!   its filtered stem-frequency counts
//! - **WordCounts**: An explicit frequency mapping (stem → count) that reads
//!   missing keys as zero
//! - **DocumentResult**: One source text's identifier plus its ordered,
//!   retained paragraphs - the unit of output
//! - **Stemmer**: The word → stem normalization seam
//! - **ResultSink**: The artifact persistence seam
//!
//! ## Architecture
//!
//! The domain crate carries only the serialization dependency the artifact
//! contract requires. Infrastructure implementations (the Snowball stemmer,
//! the JSON writer) live in other crates behind the traits defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod paragraph;
pub mod traits;
pub mod word_counts;

// Re-exports for convenience
pub use document::DocumentResult;
pub use paragraph::Paragraph;
pub use word_counts::WordCounts;
