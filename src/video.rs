//! YouTube video identifiers and the URLs built from them.

use crate::error::{RecapError, Result};
use url::Url;

/// Extract the video ID from the `v` query parameter of a URL.
///
/// Only the query parameter is consulted; short links and bare IDs are
/// rejected like any other URL without `v`.
pub fn extract_video_id(input: &str) -> Result<String> {
    let url = Url::parse(input)
        .map_err(|e| RecapError::InvalidVideoUrl(format!("{}: {}", input, e)))?;

    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RecapError::InvalidVideoUrl(format!("no video id in {}", input)))
}

/// Embeddable player URL for a video.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

/// Watch page URL for a video.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
