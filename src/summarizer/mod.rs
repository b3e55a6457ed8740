//! Summarization pipeline.
//!
//! Turns a conversation whose last user message is a video URL into a stream
//! of summary text: extract the video ID, fetch the transcript, build the
//! prompt, start the model stream.

mod gemini;

pub use gemini::GeminiModel;

use crate::config::{Prompts, Settings};
use crate::error::{RecapError, Result};
use crate::message::{last_user_message, ChatMessage, Role};
use crate::transcript::{join_segments, TranscriptProvider, YoutubeTranscripts};
use crate::video::extract_video_id;
use async_trait::async_trait;
use futures::stream::{self, Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Incremental text produced by a model.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Trait for streaming chat models.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Start a streaming completion for the given messages.
    async fn stream(&self, messages: Vec<ChatMessage>) -> Result<TextStream>;

    /// Model name, for logging.
    fn model_name(&self) -> &str;
}

/// A summary in progress.
pub struct Summary {
    /// Video the summary is about.
    pub video_id: String,
    /// Summary text as it is generated.
    pub text: TextStream,
}

/// Summarization pipeline over a transcript provider and a model.
pub struct Summarizer {
    transcripts: Arc<dyn TranscriptProvider>,
    model: Arc<dyn SummaryModel>,
    prompts: Prompts,
}

impl Summarizer {
    /// Create a summarizer with the default prompts.
    pub fn new(transcripts: Arc<dyn TranscriptProvider>, model: Arc<dyn SummaryModel>) -> Self {
        Self {
            transcripts,
            model,
            prompts: Prompts::default(),
        }
    }

    /// Create the production summarizer: YouTube transcripts and Gemini.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transcripts = Arc::new(YoutubeTranscripts::new(&settings.transcript)?);
        let model = Arc::new(GeminiModel::from_settings(&settings.llm)?);
        let prompts = Prompts::load(settings.prompts_dir().as_deref())?;

        Ok(Self::new(transcripts, model).with_prompts(prompts))
    }

    /// Set custom prompts.
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Summarize the video linked by the last user message of `messages`.
    ///
    /// Fails before any outbound call when there is no user message or the
    /// URL carries no video ID. A model that fails before producing its first
    /// chunk fails the whole call.
    #[instrument(skip_all, fields(messages = messages.len()))]
    pub async fn summarize(&self, messages: &[ChatMessage]) -> Result<Summary> {
        let request = last_user_message(messages).ok_or(RecapError::NoUserMessage)?;
        let video_id = extract_video_id(&request.content)?;
        info!("Summarizing video {}", video_id);

        let segments = self.transcripts.fetch_transcript(&video_id).await?;
        let transcript = join_segments(&segments);
        debug!(
            "Transcript has {} segments, {} characters",
            segments.len(),
            transcript.len()
        );

        let prompt = build_messages(&self.prompts, messages, &transcript);

        info!("Starting {} stream", self.model.model_name());
        let mut text = self.model.stream(prompt).await?;

        let text: TextStream = match text.next().await {
            Some(Err(e)) => return Err(e),
            Some(Ok(first)) => Box::pin(stream::once(async move { Ok(first) }).chain(text)),
            None => Box::pin(stream::empty()),
        };

        Ok(Summary { video_id, text })
    }
}

/// Build the model input: instructions, the conversation so far, then the transcript request.
///
/// Conversation messages that are not from the user are forwarded as assistant messages.
pub fn build_messages(prompts: &Prompts, history: &[ChatMessage], transcript: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(prompts.summary.system.clone()));

    messages.extend(history.iter().map(|m| match m.role {
        Role::User => ChatMessage::user(m.content.clone()),
        Role::Assistant | Role::System => ChatMessage::assistant(m.content.clone()),
    }));

    messages.push(ChatMessage::user(prompts.transcript_request(transcript)));
    messages
}
