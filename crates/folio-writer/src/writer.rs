//! JSON artifact writer

use crate::WriterError;
use folio_domain::traits::ResultSink;
use folio_domain::DocumentResult;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Writes one `<id>/<id>.json` artifact per document under a results root.
pub struct JsonResultWriter {
    results_dir: PathBuf,
}

impl JsonResultWriter {
    /// Create a writer rooted at the given results directory
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }
}

impl ResultSink for JsonResultWriter {
    type Error = WriterError;

    /// Persist the document as indented JSON.
    ///
    /// Serialization completes in memory before any file is created, so a
    /// failed document never leaves a partial artifact behind.
    fn write(&self, result: &DocumentResult) -> Result<PathBuf, WriterError> {
        let json = serde_json::to_string_pretty(result)?;

        let destination_dir = self.results_dir.join(&result.id);
        fs::create_dir_all(&destination_dir)?;

        let path = destination_dir.join(format!("{}.json", result.id));
        fs::write(&path, json)?;

        debug!(
            "Wrote {} paragraphs to {}",
            result.paragraphs.len(),
            path.display()
        );

        Ok(path)
    }
}
