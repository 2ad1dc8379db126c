//! Transcript input
//!
//! Loads and validates the plain-text transcript handed to the summariser.

mod loader;

pub use loader::{has_text_extension, load_transcript, TranscriptText, TEXT_EXTENSION};
