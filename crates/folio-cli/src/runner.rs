//! The per-document processing loop.

use crate::archive::{self, ArchiveSet};
use crate::config::Config;
use crate::error::{CliError, Result};
use folio_domain::traits::ResultSink;
use folio_domain::DocumentResult;
use folio_extractor::{BoundaryExtractor, ExtractorConfig, ParagraphTokenizer};
use folio_vocab::{SnowballStemmer, Whitelist};
use folio_writer::JsonResultWriter;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Corpus directories detected
    pub directories: usize,

    /// Documents whose artifact was written
    pub written: usize,

    /// Documents skipped because of a per-document failure
    pub skipped: usize,

    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

/// Drives the whitelist build and the per-directory document pipeline.
///
/// The whitelist is constructed exactly once, up front, and passed by
/// reference into every tokenization call. Per-document failures are logged
/// and skipped; only vocabulary construction is fatal.
pub struct Runner {
    config: Config,
    show_progress: bool,
}

impl Runner {
    /// Create a runner from a merged configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// Enable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Process every corpus directory and return the run counters.
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();

        let extractor_config = ExtractorConfig {
            min_words: self.config.min_words,
        };
        extractor_config.validate().map_err(CliError::Config)?;

        // Vocabulary failure is fatal: nothing can be filtered without it.
        let stemmer = SnowballStemmer::english();
        let whitelist = Whitelist::load_or_build(
            &self.config.dictionary_path,
            &self.config.whitelist_path,
            &stemmer,
        )?;
        let tokenizer = ParagraphTokenizer::new(stemmer, extractor_config);
        let writer = JsonResultWriter::new(&self.config.results_dir);

        let sets = archive::discover(&self.config.directories);
        info!("{} directories detected", sets.len());

        let bar = if self.show_progress {
            let bar = ProgressBar::new(sets.len() as u64);
            bar.set_style(
                ProgressStyle::with_template(
                    "Directories ({pos}/{len}): {wide_bar}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let mut summary = RunSummary {
            directories: sets.len(),
            ..Default::default()
        };

        for set in &sets {
            match self.process_directory(set, &tokenizer, &whitelist, &writer) {
                Ok(()) => summary.written += 1,
                Err(e) => {
                    warn!("Skipping {}: {}", set.directory.display(), e);
                    summary.skipped += 1;
                }
            }
            bar.inc(1);
        }

        bar.finish_and_clear();
        summary.elapsed = started.elapsed();

        info!(
            "Complete in {:.2?}: {} written, {} skipped",
            summary.elapsed, summary.written, summary.skipped
        );

        Ok(summary)
    }

    /// Run one directory through unpack → extract → tokenize → write.
    fn process_directory(
        &self,
        set: &ArchiveSet,
        tokenizer: &ParagraphTokenizer<SnowballStemmer>,
        whitelist: &Whitelist,
        writer: &JsonResultWriter,
    ) -> Result<()> {
        info!("Processing: {}", set.directory.display());
        let started = Instant::now();

        // Scoped extraction workspace: removed on every exit path, success
        // or failure, without touching the process working directory.
        let workspace = tempfile::tempdir()?;
        let textfile = archive::unpack_first(set, workspace.path())?;

        let raw = fs::read(&textfile)?;
        let body = BoundaryExtractor::extract(&raw)?;
        let paragraphs = tokenizer.tokenize(&body, whitelist);

        let id = set
            .directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| set.directory.to_string_lossy().into_owned());

        let result = DocumentResult::new(id, paragraphs);
        let path = writer.write(&result)?;

        debug!(
            "Complete: {} → {} in {:.2?}",
            set.directory.display(),
            path.display(),
            started.elapsed()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    const SAMPLE_TEXT: &[u8] = b"Gutenberg boilerplate.\n\
*** START OF THE PROJECT GUTENBERG EBOOK SAMPLE ***\n\
\n\
The whale chased the whale.\n\
\n\
Interstitial mumbling zzz.\n\
\n\
The harpoon found the whale.\n\
\n\
*** END OF THE PROJECT GUTENBERG EBOOK SAMPLE ***\n";

    fn write_corpus_entry(dir: &Path, id: &str, text: &[u8]) {
        let entry_dir = dir.join(id);
        fs::create_dir_all(&entry_dir).unwrap();
        let file = fs::File::create(entry_dir.join(format!("{}.zip", id))).unwrap();
        let mut writer = ZipWriter::new(file);
        writer
            .start_file(format!("{}.txt", id), SimpleFileOptions::default())
            .unwrap();
        writer.write_all(text).unwrap();
        writer.finish().unwrap();
    }

    fn test_config(root: &Path) -> Config {
        let dictionary = root.join("words");
        fs::write(&dictionary, "whale\nharpoon\nchase\nfind\n").unwrap();
        Config {
            directories: vec![root.join("corpus").to_string_lossy().into_owned()],
            results_dir: root.join("results"),
            dictionary_path: dictionary,
            whitelist_path: root.join("whitelist.txt"),
            min_words: 2,
        }
    }

    #[test]
    fn test_run_writes_artifact_per_document() {
        let root = tempfile::tempdir().unwrap();
        write_corpus_entry(&root.path().join("corpus"), "2701", SAMPLE_TEXT);
        write_corpus_entry(&root.path().join("corpus"), "2702", SAMPLE_TEXT);

        let runner = Runner::new(test_config(root.path()));
        let summary = runner.run().unwrap();

        assert_eq!(summary.directories, 2);
        assert_eq!(summary.written, 2);
        assert_eq!(summary.skipped, 0);

        let artifact = root.path().join("results/2701/2701.json");
        let parsed: DocumentResult =
            serde_json::from_str(&fs::read_to_string(artifact).unwrap()).unwrap();
        assert_eq!(parsed.id, "2701");
        // The interstitial paragraph has no whitelisted words and is dropped
        assert_eq!(parsed.paragraphs.len(), 2);
        assert_eq!(parsed.paragraphs[0].words.get("whale"), 2);
    }

    #[test]
    fn test_document_failure_skips_not_aborts() {
        let root = tempfile::tempdir().unwrap();
        write_corpus_entry(&root.path().join("corpus"), "2701", SAMPLE_TEXT);
        write_corpus_entry(&root.path().join("corpus"), "9999", b"no markers in here");

        let runner = Runner::new(test_config(root.path()));
        let summary = runner.run().unwrap();

        assert_eq!(summary.written, 1);
        assert_eq!(summary.skipped, 1);
        // The failed document leaves no artifact behind
        assert!(!root.path().join("results/9999").exists());
    }

    #[test]
    fn test_missing_dictionary_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        write_corpus_entry(&root.path().join("corpus"), "2701", SAMPLE_TEXT);

        let mut config = test_config(root.path());
        config.dictionary_path = root.path().join("no-such-file");
        fs::remove_file(root.path().join("words")).unwrap();

        let runner = Runner::new(config);
        assert!(matches!(runner.run(), Err(CliError::Vocab(_))));
    }

    #[test]
    fn test_whitelist_reused_across_runs() {
        let root = tempfile::tempdir().unwrap();
        write_corpus_entry(&root.path().join("corpus"), "2701", SAMPLE_TEXT);

        let config = test_config(root.path());
        Runner::new(config.clone()).run().unwrap();

        // Dictionary gone; second run must load the persisted whitelist
        fs::remove_file(&config.dictionary_path).unwrap();
        let summary = Runner::new(config).run().unwrap();
        assert_eq!(summary.written, 1);
    }
}
