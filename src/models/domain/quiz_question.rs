use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Question {
    /// The actual question text
    #[schemars(length(min = 1))]
    pub question_text: String,
    /// List of 4 possible answers
    #[schemars(length(min = 4, max = 4))]
    pub options: Vec<String>,
    /// Index of the correct answer (0-3)
    #[schemars(range(min = 0, max = 3))]
    pub correct_answer_index: u8,
    /// Brief explanation of why this answer is correct
    pub explanation: String,
}

impl Question {
    #[cfg(test)]
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_answer_index as usize)
            .map(String::as_str)
    }
}
