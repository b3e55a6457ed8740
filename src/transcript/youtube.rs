//! YouTube transcript provider.

use super::{TranscriptProvider, TranscriptSegment};
use crate::config::TranscriptSettings;
use crate::error::{RecapError, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Fetches caption tracks from YouTube.
pub struct YoutubeTranscripts {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeTranscripts {
    /// Create a provider from transcript settings.
    pub fn new(settings: &TranscriptSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            RecapError::Transcript(format!("Failed to create transcript client: {}", e))
        })?;

        Ok(Self {
            api,
            languages: settings.languages.clone(),
            preserve_formatting: settings.preserve_formatting,
        })
    }
}

#[async_trait]
impl TranscriptProvider for YoutubeTranscripts {
    #[instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| {
                RecapError::Transcript(format!("Failed to fetch transcript for {}: {}", video_id, e))
            })?;

        info!(
            "Fetched {} transcript snippets ({})",
            transcript.snippets.len(),
            transcript.language_code
        );

        let segments: Vec<TranscriptSegment> = transcript
            .snippets
            .into_iter()
            .map(|s| TranscriptSegment::new(s.text, s.start, s.duration))
            .collect();

        debug!(
            "Transcript covers {:.0}s",
            segments.last().map(|s| s.end_seconds()).unwrap_or(0.0)
        );

        Ok(segments)
    }
}
