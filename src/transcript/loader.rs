//! Reading `.txt` transcripts from disk

use std::path::Path;

use crate::{Result, SummariserError};

/// Extension accepted for transcripts and written for summaries.
pub const TEXT_EXTENSION: &str = "txt";

/// Full transcript content, guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptText(String);

impl TranscriptText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the transcript.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Whether the path names a `.txt` file. The comparison ignores case.
pub fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION))
        .unwrap_or(false)
}

/// Load a transcript, rejecting missing files, other extensions and blank content.
pub fn load_transcript(path: &Path) -> Result<TranscriptText> {
    if !path.exists() {
        return Err(SummariserError::InputNotFound(path.to_path_buf()));
    }

    if !has_text_extension(path) {
        return Err(SummariserError::NotTextFile(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| SummariserError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Err(SummariserError::EmptyTranscript(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "transcript loaded");
    Ok(TranscriptText(content))
}
