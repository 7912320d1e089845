use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::Question;

pub const QUESTIONS_PER_QUIZ: usize = 5;

/// The only value the generation pipeline hands back to its caller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Quiz {
    /// A catchy title for the quiz based on the video
    pub title: String,
    /// List of 5 multiple choice questions
    #[schemars(length(min = 5, max = 5))]
    pub questions: Vec<Question>,
}
