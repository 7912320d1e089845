use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    providers::CompletionProvider,
};

/// Sends rendered prompts to the hosted model. One attempt per call.
pub struct ModelService {
    provider: Arc<dyn CompletionProvider>,
}

impl ModelService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        self.provider
            .complete(prompt)
            .await
            .map_err(AppError::GenerationFailed)
    }
}
