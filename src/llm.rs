//! Gemini client configuration.
//!
//! Gemini exposes an OpenAI-compatible chat completions endpoint, so the
//! regular `async-openai` client is pointed at it with the Google API key.

use crate::config::LlmSettings;
use crate::error::{RecapError, Result};
use async_openai::{config::OpenAIConfig, Client};

/// Environment variable holding the Google API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Read the API key from the environment.
pub fn api_key() -> Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(key),
        Ok(_) => Err(RecapError::Config(format!("{} is empty", API_KEY_ENV))),
        Err(_) => Err(RecapError::Config(format!("{} not set", API_KEY_ENV))),
    }
}

/// Create a chat client for the configured endpoint.
///
/// No request timeout is set: summaries of long videos stream for minutes.
pub fn create_client(settings: &LlmSettings, api_key: &str) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!("recap/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let config = OpenAIConfig::new()
        .with_api_base(settings.api_base.trim_end_matches('/'))
        .with_api_key(api_key);

    Ok(Client::with_config(config).with_http_client(http_client))
}
