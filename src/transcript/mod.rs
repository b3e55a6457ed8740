//! Transcript retrieval.
//!
//! Provides a trait-based interface over transcript providers and the data
//! model shared by all of them.

mod youtube;

pub use youtube::YoutubeTranscripts;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single timed snippet of spoken text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Spoken text.
    pub text: String,
    /// Start time in seconds.
    pub start_seconds: f64,
    /// Duration in seconds.
    pub duration_seconds: f64,
}

impl TranscriptSegment {
    /// Create a new transcript segment.
    pub fn new(text: impl Into<String>, start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            duration_seconds,
        }
    }

    /// End time in seconds.
    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }
}

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the transcript segments of a video, in spoken order.
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>>;
}

/// Join segment texts into one string, separated by single spaces.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_preserves_order() {
        let segments = vec![
            TranscriptSegment::new("first", 0.0, 1.5),
            TranscriptSegment::new("second", 1.5, 2.0),
            TranscriptSegment::new("third", 3.5, 1.0),
        ];
        assert_eq!(join_segments(&segments), "first second third");
    }

    #[test]
    fn test_join_keeps_text_verbatim() {
        // No trimming or deduplication
        let segments = vec![
            TranscriptSegment::new(" padded ", 0.0, 1.0),
            TranscriptSegment::new("repeat", 1.0, 1.0),
            TranscriptSegment::new("repeat", 2.0, 1.0),
            TranscriptSegment::new("", 3.0, 1.0),
        ];
        assert_eq!(join_segments(&segments), " padded  repeat repeat ");
    }

    #[test]
    fn test_join_edge_cases() {
        assert_eq!(join_segments(&[]), "");
        assert_eq!(join_segments(&[TranscriptSegment::new("only", 0.0, 1.0)]), "only");
    }

    #[test]
    fn test_end_seconds() {
        let segment = TranscriptSegment::new("x", 10.0, 2.5);
        assert_eq!(segment.end_seconds(), 12.5);
    }
}
