//! Whitelist construction, persistence, and loading

use crate::{StopWordSet, VocabError};
use folio_domain::traits::Stemmer;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The set of stems considered meaningful vocabulary.
///
/// Built from a system dictionary minus stop-word stems, or loaded from a
/// previously persisted file. Read-only after construction; the orchestrator
/// builds it once and passes it by reference into tokenization.
pub struct Whitelist {
    stems: HashSet<String>,
}

impl Whitelist {
    /// Load the persisted whitelist if present, otherwise build it from the
    /// system dictionary and persist it.
    ///
    /// Building reads the dictionary (one word per line), lowercases and
    /// stems each word, removes stop-word stems, deduplicates, and writes the
    /// result to `whitelist_path` (one stem per line) before returning.
    /// Loading constructs the set directly from the file with no re-stemming,
    /// so repeated runs never touch the dictionary again.
    ///
    /// # Errors
    ///
    /// [`VocabError::DictionaryUnavailable`] if there is no persisted
    /// whitelist and the dictionary cannot be read. This is fatal to the run.
    pub fn load_or_build<S: Stemmer>(
        dictionary_path: &Path,
        whitelist_path: &Path,
        stemmer: &S,
    ) -> Result<Self, VocabError> {
        if whitelist_path.exists() {
            return Self::load(whitelist_path);
        }
        Self::build(dictionary_path, whitelist_path, stemmer)
    }

    /// Load a persisted whitelist, one stem per line
    pub fn load(whitelist_path: &Path) -> Result<Self, VocabError> {
        let contents = fs::read_to_string(whitelist_path).map_err(|source| {
            VocabError::WhitelistIo {
                path: whitelist_path.to_path_buf(),
                source,
            }
        })?;

        let stems: HashSet<String> = contents
            .split_whitespace()
            .map(|stem| stem.to_string())
            .collect();

        debug!("Loaded {} whitelist stems from {}", stems.len(), whitelist_path.display());

        Ok(Self { stems })
    }

    fn build<S: Stemmer>(
        dictionary_path: &Path,
        whitelist_path: &Path,
        stemmer: &S,
    ) -> Result<Self, VocabError> {
        let dictionary = fs::read_to_string(dictionary_path).map_err(|source| {
            VocabError::DictionaryUnavailable {
                path: dictionary_path.to_path_buf(),
                source,
            }
        })?;

        let stop_words = StopWordSet::new(stemmer);

        let stems: HashSet<String> = dictionary
            .lines()
            .map(|word| stemmer.stem(&word.trim().to_lowercase()))
            .filter(|stem| !stem.is_empty())
            .filter(|stem| !stop_words.contains(stem))
            .collect();

        // One stem per line, sorted so the persisted file is deterministic.
        let mut lines: Vec<&str> = stems.iter().map(String::as_str).collect();
        lines.sort_unstable();
        fs::write(whitelist_path, lines.join("\n")).map_err(|source| {
            VocabError::WhitelistIo {
                path: whitelist_path.to_path_buf(),
                source,
            }
        })?;

        info!(
            "Built whitelist: {} stems from {} dictionary words, persisted to {}",
            stems.len(),
            dictionary.lines().count(),
            whitelist_path.display()
        );

        Ok(Self { stems })
    }

    /// Whether a stem is acceptable vocabulary
    pub fn contains(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }

    /// Number of stems in the whitelist
    pub fn len(&self) -> usize {
        self.stems.len()
    }

    /// Whether the whitelist is empty
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

impl FromIterator<String> for Whitelist {
    /// Build a whitelist directly from stems. Primarily for tests; no
    /// stop-word filtering is applied.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            stems: iter.into_iter().collect(),
        }
    }
}
