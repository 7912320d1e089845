use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::{
    errors::{AppError, AppResult},
    models::domain::CaptionSegment,
};

const CAPTION_LANGUAGES: &[&str] = &["en"];

/// Source of time-coded captions keyed by video identifier.
///
/// Errors are the provider's own message; classifying them is the caller's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionSegment>, String>;
}

pub struct YoutubeCaptionProvider {
    api: YouTubeTranscriptApi,
}

impl YoutubeCaptionProvider {
    pub fn new() -> AppResult<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            AppError::InternalError(format!("Failed to initialise caption client: {}", e))
        })?;

        Ok(Self { api })
    }
}

#[async_trait]
impl CaptionProvider for YoutubeCaptionProvider {
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionSegment>, String> {
        log::info!("Fetching captions for video {}", video_id);

        let fetched = self
            .api
            .fetch_transcript(video_id, CAPTION_LANGUAGES, false)
            .await
            .map_err(|e| e.to_string())?;

        let segments: Vec<CaptionSegment> = fetched
            .snippets
            .into_iter()
            .map(|snippet| CaptionSegment::new(snippet.start, snippet.duration, snippet.text))
            .collect();

        log::info!(
            "Fetched {} caption segments for video {}",
            segments.len(),
            video_id
        );
        Ok(segments)
    }
}
