//! Gemini streaming model.

use super::{SummaryModel, TextStream};
use crate::config::LlmSettings;
use crate::error::{RecapError, Result};
use crate::llm::{api_key, create_client, API_KEY_ENV};
use crate::message::{ChatMessage, Role};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs, CreateChatCompletionStreamResponse,
};
use async_openai::Client;
use async_trait::async_trait;
use futures::StreamExt;
use tracing::{instrument, warn};

/// Gemini chat model reached through the OpenAI-compatible endpoint.
pub struct GeminiModel {
    client: Option<Client<OpenAIConfig>>,
    model: String,
}

impl GeminiModel {
    /// Create a model from settings and `GOOGLE_API_KEY`.
    ///
    /// A missing key is not fatal here; every request fails until it is set.
    pub fn from_settings(settings: &LlmSettings) -> Result<Self> {
        let client = match api_key() {
            Ok(key) => Some(create_client(settings, &key)?),
            Err(e) => {
                warn!("{}; summarization requests will fail", e);
                None
            }
        };

        Ok(Self {
            client,
            model: settings.model.clone(),
        })
    }

    /// Whether an API key was available at construction.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl SummaryModel for GeminiModel {
    #[instrument(skip_all, fields(model = %self.model, messages = messages.len()))]
    async fn stream(&self, messages: Vec<ChatMessage>) -> Result<TextStream> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| RecapError::Config(format!("{} not set", API_KEY_ENV)))?;

        let messages = messages
            .into_iter()
            .map(to_request_message)
            .collect::<Result<Vec<_>>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| RecapError::Model(e.to_string()))?;

        let stream = client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| RecapError::Model(format!("Failed to start stream: {}", e)))?;

        let text = stream.filter_map(|chunk| async move {
            match chunk {
                Ok(response) => delta_text(response).map(Ok),
                Err(e) => Some(Err(RecapError::Model(format!("Stream failed: {}", e)))),
            }
        });

        Ok(Box::pin(text))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Text carried by one stream chunk, joined across choices. `None` when empty.
fn delta_text(response: CreateChatCompletionStreamResponse) -> Option<String> {
    let delta: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .collect();
    (!delta.is_empty()).then_some(delta)
}

fn to_request_message(message: ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let built: ChatCompletionRequestMessage = match message.role {
        Role::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(message.content)
            .build()
            .map_err(|e| RecapError::Model(e.to_string()))?
            .into(),
        Role::User => ChatCompletionRequestUserMessageArgs::default()
            .content(message.content)
            .build()
            .map_err(|e| RecapError::Model(e.to_string()))?
            .into(),
        Role::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(message.content)
            .build()
            .map_err(|e| RecapError::Model(e.to_string()))?
            .into(),
    };
    Ok(built)
}
