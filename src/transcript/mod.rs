use anyhow::{Context, Result};
use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::config::TranscriptConfig;

/// Trait for fetching the flattened text transcript of a video
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the full transcript for `video_id` as a single string
    async fn fetch(&self, video_id: &str) -> Result<String>;
}

/// Extract a video identifier from a watch URL.
///
/// Takes the trailing `=`-delimited token, matching the behavior existing
/// callers rely on. Known gap: a URL with query parameters after the video id
/// (e.g. `?v=abc&t=30`) yields the wrong token. Returns `None` when the URL
/// contains no `=` at all.
pub fn extract_video_id(url: &str) -> Option<&str> {
    if !url.contains('=') {
        return None;
    }

    url.rsplit('=').next().filter(|id| !id.is_empty())
}

/// Transcript source backed by YouTube's caption tracks
pub struct YoutubeTranscriptSource {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YoutubeTranscriptSource {
    pub fn new(config: &TranscriptConfig) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .context("Failed to construct the YouTube transcript client")?;

        Ok(Self {
            api,
            languages: config.languages.clone(),
        })
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn fetch(&self, video_id: &str) -> Result<String> {
        tracing::info!(video_id, "fetching transcript");

        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .with_context(|| format!("Failed to fetch transcript for video {video_id}"))?;

        tracing::debug!(
            video_id,
            snippet_count = transcript.snippets.len(),
            language = %transcript.language_code,
            "transcript fetched"
        );

        // Flatten the timed fragments into one string; fragment order is
        // temporal order, so a plain space-join preserves it.
        let text = transcript
            .snippets
            .iter()
            .map(|snippet| snippet.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=MS5UjNKw_1M"),
            Some("MS5UjNKw_1M")
        );
    }

    #[test]
    fn takes_the_trailing_token_for_multi_parameter_urls() {
        // Documented limitation of the positional policy: the last token
        // wins, even when it is not the video id.
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=MS5UjNKw_1M&t=30"),
            Some("30")
        );
    }

    #[test]
    fn url_without_equals_yields_none() {
        assert_eq!(extract_video_id("https://youtu.be/MS5UjNKw_1M"), None);
    }

    #[test]
    fn trailing_equals_yields_none() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
    }
}
