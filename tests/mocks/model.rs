use async_trait::async_trait;
use futures::stream;
use recap::message::ChatMessage;
use recap::summarizer::{SummaryModel, TextStream};
use recap::{RecapError, Result};
use std::sync::{Arc, Mutex};

/// Streams canned chunks; an `Err` entry becomes a model error at that point.
#[derive(Clone)]
pub struct MockModel {
    pub chunks: Vec<std::result::Result<String, String>>,
    pub calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    pub fail_on_start: Option<String>,
}

impl MockModel {
    pub fn new(chunks: &[&str]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| Ok(c.to_string())).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on_start: None,
        }
    }

    pub fn with_chunks(chunks: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            chunks,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on_start: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            chunks: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on_start: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl SummaryModel for MockModel {
    async fn stream(&self, messages: Vec<ChatMessage>) -> Result<TextStream> {
        self.calls.lock().unwrap().push(messages);
        if let Some(ref msg) = self.fail_on_start {
            return Err(RecapError::Model(msg.clone()));
        }

        let items: Vec<Result<String>> = self
            .chunks
            .iter()
            .cloned()
            .map(|c| c.map_err(RecapError::Model))
            .collect();
        Ok(Box::pin(stream::iter(items)))
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}
