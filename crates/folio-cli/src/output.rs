//! Output formatting for the CLI.

use crate::runner::RunSummary;
use colored::Colorize;

/// Render the end-of-run summary line.
pub fn render_summary(summary: &RunSummary, color_enabled: bool) -> String {
    let written = format!("{} written", summary.written);
    let skipped = format!("{} skipped", summary.skipped);

    let (written, skipped) = if color_enabled {
        let skipped = if summary.skipped > 0 {
            skipped.yellow().to_string()
        } else {
            skipped.normal().to_string()
        };
        (written.green().to_string(), skipped)
    } else {
        (written, skipped)
    };

    format!(
        "Complete in {:.2?}: {} directories, {}, {}",
        summary.elapsed, summary.directories, written, skipped
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_summary_without_color() {
        let summary = RunSummary {
            directories: 3,
            written: 2,
            skipped: 1,
            elapsed: Duration::from_secs(4),
        };
        let rendered = render_summary(&summary, false);
        assert!(rendered.contains("3 directories"));
        assert!(rendered.contains("2 written"));
        assert!(rendered.contains("1 skipped"));
    }

    #[test]
    fn test_summary_with_color_keeps_content() {
        let summary = RunSummary {
            directories: 1,
            written: 1,
            skipped: 0,
            elapsed: Duration::from_secs(1),
        };
        let rendered = render_summary(&summary, true);
        assert!(rendered.contains("1 directories"));
        assert!(rendered.contains("1 written"));
        assert!(rendered.contains("0 skipped"));
    }
}
