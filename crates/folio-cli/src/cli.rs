//! CLI command definitions and argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Folio - parse archived public-domain texts into paragraph records.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Corpus directories to parse (defaults to the configured directories)
    pub directories: Vec<String>,

    /// Directory where JSON artifacts are written
    #[arg(short, long)]
    pub results_dir: Option<PathBuf>,

    /// Minimum whitelisted-word occurrences for a paragraph to be retained
    #[arg(short, long)]
    pub min_words: Option<usize>,

    /// System dictionary used to build the whitelist
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Persisted whitelist file (built on first run if absent)
    #[arg(long)]
    pub whitelist: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Persist the merged configuration before running
    #[arg(long)]
    pub save_config: bool,

    /// Run verbosely (per-directory timing, debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Show a progress bar
    #[arg(short, long)]
    pub progress: bool,
}
