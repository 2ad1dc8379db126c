//! Configuration module for the summariser
//!
//! Handles loading settings from a TOML file with environment overrides.

mod settings;

pub use settings::{BedrockSettings, Settings};
