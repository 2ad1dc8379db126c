//! Writing the summary document

use std::path::Path;

use crate::{Result, SummariserError};

/// First line of every summary file; followed by a blank line.
pub const SUMMARY_HEADER: &str = "Transcript Summary";

/// Render the file body: header, blank line, trimmed summary, newline.
pub fn render_summary(summary: &str) -> String {
    format!("{SUMMARY_HEADER}\n\n{}\n", summary.trim())
}

/// Write the summary to `path`, replacing any existing file.
pub fn write_summary(summary: &str, path: &Path) -> Result<()> {
    std::fs::write(path, render_summary(summary)).map_err(|source| SummariserError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "summary written");
    Ok(())
}
