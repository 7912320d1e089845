use crate::models::domain::CaptionSegment;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Two captions matching the rendering example `[0.00s-2.50s] Hello`.
    pub fn sample_segments() -> Vec<CaptionSegment> {
        vec![
            CaptionSegment::new(0.0, 2.5, "Hello"),
            CaptionSegment::new(2.5, 3.0, "World"),
        ]
    }

    /// A model reply with 5 well-formed questions.
    pub fn valid_quiz_value() -> serde_json::Value {
        serde_json::json!({
            "title": "Never Gonna Quiz You Up",
            "questions": [
                {
                    "question_text": "What does the singer promise never to do first?",
                    "options": ["Let you down", "Give you up", "Run around", "Make you cry"],
                    "correct_answer_index": 1,
                    "explanation": "The chorus opens with 'Never gonna give you up'."
                },
                {
                    "question_text": "Which word best describes the singer's commitment?",
                    "options": ["Temporary", "Reluctant", "Total", "Conditional"],
                    "correct_answer_index": 2,
                    "explanation": "Every line is a promise that holds without exception."
                },
                {
                    "question_text": "What does the singer say both people know?",
                    "options": ["The rules", "The weather", "The time", "The way home"],
                    "correct_answer_index": 0,
                    "explanation": "'You know the rules and so do I.'"
                },
                {
                    "question_text": "What will the singer never tell?",
                    "options": ["A secret", "A joke", "A story", "A lie"],
                    "correct_answer_index": 3,
                    "explanation": "'Never gonna tell a lie and hurt you.'"
                },
                {
                    "question_text": "How long have the two known each other?",
                    "options": ["A few days", "So long", "Since yesterday", "Not at all"],
                    "correct_answer_index": 1,
                    "explanation": "'We've known each other for so long.'"
                }
            ]
        })
    }

    pub fn valid_quiz_json() -> String {
        valid_quiz_value().to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Quiz;

    #[test]
    fn test_fixtures_sample_segments() {
        let segments = sample_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].end(), 5.5);
    }

    #[test]
    fn test_fixtures_valid_quiz_deserializes() {
        let quiz: Quiz = serde_json::from_value(valid_quiz_value()).unwrap();
        assert_eq!(quiz.questions.len(), 5);
        assert!(quiz.questions.iter().all(|q| q.correct_option().is_some()));
    }
}
