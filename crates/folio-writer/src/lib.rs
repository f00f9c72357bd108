//! Folio Writer
//!
//! Persists parsed documents as JSON artifacts. Implements the
//! [`ResultSink`](folio_domain::traits::ResultSink) seam: one indented,
//! human-readable JSON file per source text, placed under a per-document
//! directory inside the results root.

#![warn(missing_docs)]

mod error;
mod writer;

pub use error::WriterError;
pub use writer::JsonResultWriter;
