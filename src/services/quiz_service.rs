use std::fmt;

use crate::{
    errors::AppResult,
    models::domain::Quiz,
    services::{
        model_service::ModelService, prompt_service::PromptBuilder, quiz_parser,
        transcript_service::TranscriptService,
    },
};

/// Stages of one quiz generation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Fetching,
    Prompting,
    Generating,
    Parsing,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn next(self) -> Self {
        match self {
            PipelineStage::Fetching => PipelineStage::Prompting,
            PipelineStage::Prompting => PipelineStage::Generating,
            PipelineStage::Generating => PipelineStage::Parsing,
            PipelineStage::Parsing => PipelineStage::Done,
            PipelineStage::Done => PipelineStage::Done,
            PipelineStage::Failed => PipelineStage::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Fetching => write!(f, "fetching"),
            PipelineStage::Prompting => write!(f, "prompting"),
            PipelineStage::Generating => write!(f, "generating"),
            PipelineStage::Parsing => write!(f, "parsing"),
            PipelineStage::Done => write!(f, "done"),
            PipelineStage::Failed => write!(f, "failed"),
        }
    }
}

/// Tracks the current stage of a single run and logs every transition.
struct PipelineRun<'a> {
    video_url: &'a str,
    stage: PipelineStage,
}

impl<'a> PipelineRun<'a> {
    fn start(video_url: &'a str) -> Self {
        log::info!("Quiz pipeline for {} entering {}", video_url, PipelineStage::Fetching);
        Self {
            video_url,
            stage: PipelineStage::Fetching,
        }
    }

    fn advance(&mut self) {
        self.stage = self.stage.next();
        if self.stage.is_terminal() {
            log::info!("Quiz pipeline for {} {}", self.video_url, self.stage);
        } else {
            log::info!("Quiz pipeline for {} entering {}", self.video_url, self.stage);
        }
    }

    /// Moves to `Failed` when the current stage returned an error.
    fn check<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        if let Err(err) = &result {
            log::warn!(
                "Quiz pipeline for {} failed during {}: {}",
                self.video_url,
                self.stage,
                err
            );
            self.stage = PipelineStage::Failed;
        }
        result
    }
}

pub struct QuizService {
    transcript_service: TranscriptService,
    prompt_builder: PromptBuilder,
    model_service: ModelService,
}

impl QuizService {
    pub fn new(
        transcript_service: TranscriptService,
        prompt_builder: PromptBuilder,
        model_service: ModelService,
    ) -> Self {
        Self {
            transcript_service,
            prompt_builder,
            model_service,
        }
    }

    /// Runs fetch, prompt, generate and parse strictly in sequence. Either a
    /// fully validated quiz comes back or the first stage's error does.
    pub async fn generate_quiz(&self, video_url: &str) -> AppResult<Quiz> {
        let mut run = PipelineRun::start(video_url);

        let transcript = run.check(self.transcript_service.fetch_transcript(video_url).await)?;
        run.advance();

        let prompt = self.prompt_builder.render(&transcript.render());
        run.advance();

        let raw = run.check(self.model_service.generate(&prompt).await)?;
        run.advance();

        let quiz = run.check(quiz_parser::parse(&raw))?;
        run.advance();

        log::info!(
            "Generated quiz '{}' with {} questions for video {}",
            quiz.title,
            quiz.questions.len(),
            transcript.video_id
        );
        Ok(quiz)
    }
}
