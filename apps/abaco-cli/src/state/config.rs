//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ABACO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the renderer writes the display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Secondary line, then primary line
    #[default]
    Text,

    /// One JSON object per key press
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Output format
    pub output: OutputMode,

    /// Ring the terminal bell on every key press
    pub sound_enabled: bool,

    /// Printed before each input line in text mode
    pub prompt: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Output: text
    /// - Sound: off (the keypad starts muted)
    /// - Prompt: none
    fn default() -> Self {
        ConfigState {
            output: OutputMode::Text,
            sound_enabled: false,
            prompt: String::new(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ABACO_OUTPUT`: `text` or `json`
    /// - `ABACO_SOUND`: `true` or `false`
    /// - `ABACO_PROMPT`: prompt string
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(output) = lookup("ABACO_OUTPUT") {
            config.output = match output.trim().to_ascii_lowercase().as_str() {
                "text" => OutputMode::Text,
                "json" => OutputMode::Json,
                _ => return Err(ConfigError::InvalidValue("ABACO_OUTPUT".to_string())),
            };
        }

        if let Some(sound) = lookup("ABACO_SOUND") {
            config.sound_enabled = sound
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ABACO_SOUND".to_string()))?;
        }

        if let Some(prompt) = lookup("ABACO_PROMPT") {
            config.prompt = prompt;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
