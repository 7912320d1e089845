pub mod caption_provider;
pub mod completion_provider;

pub use caption_provider::{CaptionProvider, YoutubeCaptionProvider};
pub use completion_provider::{CompletionProvider, OpenAiCompletionProvider};
