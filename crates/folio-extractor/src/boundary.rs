//! Boundary detection and body cleanup

use crate::error::ExtractError;
use regex::bytes;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Marker detection runs over raw bytes: the encoding is repaired only after
// slicing, so offsets are byte offsets into the undecoded input.
// The start banner may be preceded by other characters on the same line, so
// neither marker is anchored to line start. The `[^$]` class spans newlines,
// matching the original marker grammar.
static START_MARKER: LazyLock<bytes::Regex> = LazyLock::new(|| {
    bytes::Regex::new(r"(?im-u)\*{3,}\s*START[^$]*PROJECT GUTENBERG[^*]*\*{3,}\s*$")
        .expect("start marker pattern is valid")
});

static END_MARKER: LazyLock<bytes::Regex> = LazyLock::new(|| {
    bytes::Regex::new(r"(?im-u)\*{3,}\s*END[^$]*PROJECT GUTENBERG")
        .expect("end marker pattern is valid")
});

// The start banner itself: 3+ asterisks, non-asterisk content, 3+ asterisks.
// Anchored to the start of the sliced body, so only the single leading run is
// stripped, together with the whitespace immediately after it.
static LEADING_BANNER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*{3,}[^*]*\*{3,}\s*").expect("banner pattern is valid")
});

/// Locates the licensed body of a source text and cleans it.
pub struct BoundaryExtractor;

impl BoundaryExtractor {
    /// Extract the cleaned body from one raw document.
    ///
    /// The slice runs from the start-marker offset through the end-marker
    /// start offset inclusive, so the first byte of the end marker is
    /// retained in the body. That retention is a quirk of the original
    /// boundary arithmetic, kept for fidelity.
    ///
    /// Decoding never fails: byte sequences that are not valid UTF-8 are
    /// replaced with `?`.
    ///
    /// # Errors
    ///
    /// [`ExtractError::BoundaryNotFound`] if either marker is absent,
    /// [`ExtractError::EmptyBody`] if nothing remains after cleanup.
    pub fn extract(raw: &[u8]) -> Result<String, ExtractError> {
        let start = START_MARKER.find(raw).map(|m| m.start());
        let end = END_MARKER.find(raw).map(|m| m.start());

        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            (start, end) => {
                return Err(ExtractError::BoundaryNotFound { start, end });
            }
        };

        debug!("Boundary markers at byte offsets {}..={}", start, end);

        // An end marker before the start marker yields an empty region.
        let region: &[u8] = if end < start { &[] } else { &raw[start..=end] };

        let decoded = String::from_utf8_lossy(region).replace('\u{FFFD}', "?");
        let decoded = decoded.replace('\r', "");
        let chomped = LEADING_BANNER.replace(&decoded, "");
        let cleaned = collapse_blank_lines(&chomped);

        if cleaned.is_empty() {
            return Err(ExtractError::EmptyBody);
        }

        Ok(cleaned)
    }
}

/// Collapse every whitespace-only line to an empty line.
///
/// The line itself is preserved; only its content is removed. Paragraph
/// splitting keys on literal blank lines, so this is what turns "visually
/// blank" separators into real boundaries.
fn collapse_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect();
    lines.join("\n")
}
