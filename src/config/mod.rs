//! Configuration module for Recap.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, SummaryPrompts};
pub use settings::{LlmSettings, PromptSettings, ServerSettings, Settings, TranscriptSettings};
