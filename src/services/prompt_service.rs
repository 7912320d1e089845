use once_cell::sync::Lazy;

use crate::{
    config::DEFAULT_TRANSCRIPT_CHAR_LIMIT,
    constants::quiz_prompt::{
        FORMAT_INSTRUCTIONS_EPILOGUE, FORMAT_INSTRUCTIONS_PREAMBLE, FORMAT_INSTRUCTIONS_SLOT,
        QUIZ_GENERATION_TEMPLATE, TRANSCRIPT_SLOT,
    },
    models::domain::Quiz,
};

static FORMAT_INSTRUCTIONS: Lazy<String> = Lazy::new(render_format_instructions);

fn render_format_instructions() -> String {
    let mut schema = serde_json::to_value(schemars::schema_for!(Quiz))
        .unwrap_or_else(|_| serde_json::json!({}));
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
    }

    format!(
        "{}{}{}",
        FORMAT_INSTRUCTIONS_PREAMBLE, schema, FORMAT_INSTRUCTIONS_EPILOGUE
    )
}

/// Plain-text description of the `Quiz` JSON schema, embedded into the prompt.
pub fn format_instructions() -> &'static str {
    &FORMAT_INSTRUCTIONS
}

/// First `limit` characters of `text`, cut on a char boundary.
pub fn truncate_transcript(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Renders the quiz prompt with the transcript cut to the default limit.
pub fn build_prompt(transcript_text: &str, format_instructions: &str) -> String {
    build_prompt_with_limit(
        transcript_text,
        format_instructions,
        DEFAULT_TRANSCRIPT_CHAR_LIMIT,
    )
}

/// Renders the quiz prompt with the transcript cut to `char_limit` characters.
pub fn build_prompt_with_limit(
    transcript_text: &str,
    format_instructions: &str,
    char_limit: usize,
) -> String {
    let truncated = truncate_transcript(transcript_text, char_limit);
    if truncated.len() < transcript_text.len() {
        log::warn!(
            "Transcript truncated to {} characters before prompting",
            char_limit
        );
    }

    QUIZ_GENERATION_TEMPLATE
        .replace(FORMAT_INSTRUCTIONS_SLOT, format_instructions)
        .replacen(TRANSCRIPT_SLOT, truncated, 1)
}

pub struct PromptBuilder {
    char_limit: usize,
}

impl PromptBuilder {
    pub fn new(char_limit: usize) -> Self {
        Self { char_limit }
    }

    pub fn render(&self, transcript_text: &str) -> String {
        build_prompt_with_limit(transcript_text, format_instructions(), self.char_limit)
    }
}
