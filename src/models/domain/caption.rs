use serde::Serialize;

/// One timestamped snippet from a video's caption track.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaptionSegment {
    pub start: f64,    // seconds from the start of the video
    pub duration: f64, // seconds the caption stays on screen
    pub text: String,
}

impl CaptionSegment {
    /// Negative or NaN timings from the provider are clamped to zero.
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        CaptionSegment {
            start: start.max(0.0),
            duration: duration.max(0.0),
            text: text.into(),
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// `[0.00s-2.50s] Hello`
    pub fn render(&self) -> String {
        format!("[{:.2}s-{:.2}s] {}", self.start, self.end(), self.text)
    }
}

/// Caption segments in the order the provider returned them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Transcript {
    pub video_id: String,
    pub segments: Vec<CaptionSegment>,
}

impl Transcript {
    pub fn new(video_id: impl Into<String>, segments: Vec<CaptionSegment>) -> Self {
        Transcript {
            video_id: video_id.into(),
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn render(&self) -> String {
        self.segments
            .iter()
            .map(CaptionSegment::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
