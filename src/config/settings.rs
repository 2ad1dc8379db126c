//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// AWS Bedrock settings
    #[serde(default)]
    pub bedrock: BedrockSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BedrockSettings {
    /// AWS region hosting the Bedrock runtime endpoint
    #[serde(default = "default_region")]
    pub region: String,

    /// Bedrock model identifier
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Value of the `anthropic_version` field in the request body
    #[serde(default = "default_anthropic_version")]
    pub anthropic_version: String,

    /// Maximum number of tokens the model may generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

// Default value functions

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_model_id() -> String {
    "anthropic.claude-3-sonnet-20240229-v1:0".to_string()
}

fn default_anthropic_version() -> String {
    "bedrock-2023-05-31".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

impl Default for BedrockSettings {
    fn default() -> Self {
        Self {
            region: default_region(),
            model_id: default_model_id(),
            anthropic_version: default_anthropic_version(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut settings = Self::load_from(&config_path)?;
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Load settings from a specific file, falling back to defaults when absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    /// Apply `SUMMARISER_*` overrides; `lookup` is usually `std::env::var`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(region) = non_blank("SUMMARISER_REGION") {
            self.bedrock.region = region.trim().to_string();
        }
        if let Some(model_id) = non_blank("SUMMARISER_MODEL_ID") {
            self.bedrock.model_id = model_id.trim().to_string();
        }
        if let Some(max_tokens) = non_blank("SUMMARISER_MAX_TOKENS") {
            self.bedrock.max_tokens = max_tokens
                .trim()
                .parse()
                .with_context(|| format!("Invalid SUMMARISER_MAX_TOKENS value: {max_tokens}"))?;
        }
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "transcript-summariser", "transcript-summariser")
            .context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
