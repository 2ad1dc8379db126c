//! Output file naming

use chrono::{DateTime, Local};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::transcript::TEXT_EXTENSION;

/// `YYYYmmdd_HHMMSS`, e.g. `20240315_093000`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Format a point in time as the versioning suffix used in output names.
pub fn run_timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Compute where the summary for `input` is written.
///
/// Without an explicit path the file sits next to the input as
/// `<stem>_summary_<timestamp>.txt`. An explicit path always gets the
/// timestamp too: spliced before a `.txt` extension, or appended together with
/// `.txt` otherwise.
pub fn output_path(input: &Path, explicit: Option<&Path>, timestamp: &str) -> PathBuf {
    match explicit {
        None => {
            let stem = input.file_stem().unwrap_or_default();
            sibling(input, stem, &format!("_summary_{timestamp}.{TEXT_EXTENSION}"))
        }
        Some(path) if path.extension().is_some_and(|ext| ext == TEXT_EXTENSION) => {
            let stem = path.file_stem().unwrap_or_default();
            sibling(path, stem, &format!("_{timestamp}.{TEXT_EXTENSION}"))
        }
        Some(path) => {
            let name = path.file_name().unwrap_or_default();
            sibling(path, name, &format!("_{timestamp}.{TEXT_EXTENSION}"))
        }
    }
}

fn sibling(path: &Path, base: &OsStr, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base);
    name.push(suffix);
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
