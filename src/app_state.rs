use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    providers::{
        CaptionProvider, CompletionProvider, OpenAiCompletionProvider, YoutubeCaptionProvider,
    },
    services::{
        model_service::ModelService, prompt_service::PromptBuilder, quiz_service::QuizService,
        transcript_service::TranscriptService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let caption_provider = Arc::new(YoutubeCaptionProvider::new()?);
        let completion_provider = Arc::new(OpenAiCompletionProvider::new(&config));

        Ok(Self::with_providers(config, caption_provider, completion_provider))
    }

    pub fn with_providers(
        config: Config,
        caption_provider: Arc<dyn CaptionProvider>,
        completion_provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            TranscriptService::new(caption_provider),
            PromptBuilder::new(config.transcript_char_limit),
            ModelService::new(completion_provider),
        ));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
