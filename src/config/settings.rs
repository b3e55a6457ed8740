//! Configuration settings for Recap.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcript: TranscriptSettings,
    pub prompts: PromptSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Summarization model settings.
///
/// The API key is never stored here; it is read from `GOOGLE_API_KEY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Gemini model name.
    pub model: String,
    /// Base URL of the OpenAI-compatible chat completions endpoint.
    pub api_base: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
        }
    }
}

/// Transcript retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Caption languages to try, in order of preference.
    pub languages: Vec<String>,
    /// Keep HTML formatting tags that some caption tracks carry.
    pub preserve_formatting: bool,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            languages: ["en", "es", "fr", "de", "pt", "it", "nl", "ru", "ja", "ko", "zh-Hans", "hi", "ar"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
            preserve_formatting: false,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recap")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded custom prompts directory, if one is configured.
    pub fn prompts_dir(&self) -> Option<PathBuf> {
        self.prompts.custom_dir.as_deref().map(Self::expand_path)
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
