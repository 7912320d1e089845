use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Transcript,
    providers::CaptionProvider,
};

const SHORT_LINK_HOST: &str = "youtu.be";

/// Best-effort textual lookup of the video identifier. Anything that does not
/// look like a watch URL or a short link is returned unchanged.
pub fn extract_video_id(video_url: &str) -> &str {
    if let Some((_, after)) = video_url.split_once("v=") {
        return after.split('&').next().unwrap_or(after);
    }

    if video_url.contains(SHORT_LINK_HOST) {
        let last = video_url.rsplit('/').next().unwrap_or(video_url);
        return last.split('?').next().unwrap_or(last);
    }

    video_url
}

pub struct TranscriptService {
    provider: Arc<dyn CaptionProvider>,
}

impl TranscriptService {
    pub fn new(provider: Arc<dyn CaptionProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch_transcript(&self, video_url: &str) -> AppResult<Transcript> {
        let video_id = extract_video_id(video_url.trim());
        if video_id.is_empty() {
            return Err(AppError::InternalError(format!(
                "No usable video identifier in '{}'",
                video_url
            )));
        }

        let segments = self
            .provider
            .fetch_captions(video_id)
            .await
            .map_err(AppError::TranscriptUnavailable)?;

        let transcript = Transcript::new(video_id, segments);
        if transcript.is_empty() {
            return Err(AppError::TranscriptUnavailable(format!(
                "no captions available for video {}",
                video_id
            )));
        }

        Ok(transcript)
    }
}
