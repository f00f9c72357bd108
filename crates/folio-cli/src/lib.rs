//! Folio CLI library.
//!
//! This library provides the orchestration layer for the Folio corpus
//! parser: configuration management, archive discovery and unpacking,
//! the per-document processing loop, and run reporting. The parsing core
//! itself lives in the folio-extractor, folio-vocab, and folio-writer
//! crates; this layer only wires plain file paths and bytes into it.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod runner;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use runner::{RunSummary, Runner};
