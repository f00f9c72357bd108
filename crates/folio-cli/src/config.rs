//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// Values come from built-in defaults, overridden by the configuration file,
/// overridden by command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Corpus directories to search for archives
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,

    /// Directory where JSON artifacts are written
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// System dictionary used to build the whitelist
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,

    /// Persisted whitelist file
    #[serde(default = "default_whitelist_path")]
    pub whitelist_path: PathBuf,

    /// Minimum whitelisted-word occurrences for a paragraph to be retained
    #[serde(default = "default_min_words")]
    pub min_words: usize,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".folio").join("config.toml"))
    }

    /// Load configuration from the given file, the default location, or fall
    /// back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to the given file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if !cli.directories.is_empty() {
            self.directories = cli.directories.clone();
        }
        if let Some(results_dir) = &cli.results_dir {
            self.results_dir = results_dir.clone();
        }
        if let Some(dictionary) = &cli.dictionary {
            self.dictionary_path = dictionary.clone();
        }
        if let Some(whitelist) = &cli.whitelist {
            self.whitelist_path = whitelist.clone();
        }
        if let Some(min_words) = cli.min_words {
            self.min_words = min_words;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directories: default_directories(),
            results_dir: default_results_dir(),
            dictionary_path: default_dictionary_path(),
            whitelist_path: default_whitelist_path(),
            min_words: default_min_words(),
        }
    }
}

fn default_directories() -> Vec<String> {
    vec!["gutenberg_data".to_string()]
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("/usr/share/dict/words")
}

fn default_whitelist_path() -> PathBuf {
    PathBuf::from("whitelist.txt")
}

fn default_min_words() -> usize {
    2
}
