//! Recap - YouTube video summaries
//!
//! Fetches the transcript of a YouTube video and streams a structured summary
//! generated by Gemini, to a browser page or to the terminal.
//!
//! # Architecture
//!
//! - `config` - Settings and prompt templates
//! - `video` - Video ID extraction and embed URLs
//! - `transcript` - Transcript providers
//! - `message` - Conversation messages
//! - `summarizer` - The summarization pipeline and streaming models
//! - `render` - Line-based markdown-to-HTML rendering
//! - `server` - HTTP server with the web UI and the streaming endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use recap::config::Settings;
//! use recap::message::ChatMessage;
//! use recap::summarizer::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let summarizer = Summarizer::from_settings(&settings)?;
//!
//!     let messages = [ChatMessage::user("https://www.youtube.com/watch?v=dQw4w9WgXcQ")];
//!     let mut summary = summarizer.summarize(&messages).await?;
//!     while let Some(chunk) = summary.text.next().await {
//!         print!("{}", chunk?);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod message;
pub mod render;
pub mod server;
pub mod summarizer;
pub mod transcript;
pub mod video;

pub use error::{RecapError, Result};
