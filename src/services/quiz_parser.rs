use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        quiz::QUESTIONS_PER_QUIZ, quiz_question::OPTIONS_PER_QUESTION, Question, Quiz,
    },
};

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```[A-Za-z]*\s*(.*?)\s*```$").expect("CODE_FENCE is a valid regex pattern")
});

const MAX_ANSWER_INDEX: i64 = OPTIONS_PER_QUESTION as i64 - 1;
const MAX_REPORTED_VALUE_CHARS: usize = 160;

/// Decodes raw model output into a `Quiz`, rejecting on the first field that
/// does not match the schema. Never returns a partially valid quiz.
pub fn parse(raw_text: &str) -> AppResult<Quiz> {
    let value = decode(raw_text)?;

    // Top-level shape.
    let root = value
        .as_object()
        .ok_or_else(|| violation("(root)", "a JSON object", &value))?;
    let title_value = required(root, "title", "title")?;
    let questions_value = required(root, "questions", "questions")?;
    let raw_questions = questions_value
        .as_array()
        .ok_or_else(|| violation("questions", "an array", questions_value))?;

    if raw_questions.is_empty() {
        return Err(violation("questions", "a non-empty array", questions_value));
    }
    if raw_questions.len() != QUESTIONS_PER_QUIZ {
        return Err(AppError::SchemaViolation(format!(
            "field `questions` must contain exactly {} items, received {}",
            QUESTIONS_PER_QUIZ,
            raw_questions.len()
        )));
    }

    let mut shaped = Vec::with_capacity(raw_questions.len());
    for (i, raw) in raw_questions.iter().enumerate() {
        shaped.push(check_structure(i, raw)?);
    }

    let title = string_field(title_value, "title")?;
    let questions = shaped
        .into_iter()
        .enumerate()
        .map(|(i, (object, options, index))| build_question(i, object, options, index))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Quiz { title, questions })
}

type ShapedQuestion<'a> = (&'a Map<String, Value>, &'a [Value], u8);

/// Option count and answer index, checked before any string field.
fn check_structure(i: usize, raw: &Value) -> AppResult<ShapedQuestion<'_>> {
    let path = format!("questions[{}]", i);
    let object = raw
        .as_object()
        .ok_or_else(|| violation(&path, "an object", raw))?;

    let options_path = format!("{}.options", path);
    let options_value = required(object, "options", &options_path)?;
    let options = options_value
        .as_array()
        .ok_or_else(|| violation(&options_path, "an array", options_value))?;
    if options.len() != OPTIONS_PER_QUESTION {
        return Err(AppError::SchemaViolation(format!(
            "field `{}` must contain exactly {} items, received {}: {}",
            options_path,
            OPTIONS_PER_QUESTION,
            options.len(),
            describe(options_value)
        )));
    }

    let index_path = format!("{}.correct_answer_index", path);
    let index_value = required(object, "correct_answer_index", &index_path)?;
    let index = as_integer(index_value)
        .filter(|n| (0..=MAX_ANSWER_INDEX).contains(n))
        .ok_or_else(|| {
            violation(
                &index_path,
                &format!("an integer in [0, {}]", MAX_ANSWER_INDEX),
                index_value,
            )
        })?;

    Ok((object, options.as_slice(), index as u8))
}

fn build_question(
    i: usize,
    object: &Map<String, Value>,
    options: &[Value],
    correct_answer_index: u8,
) -> AppResult<Question> {
    let path = format!("questions[{}]", i);

    let text_path = format!("{}.question_text", path);
    let question_text = string_field(required(object, "question_text", &text_path)?, &text_path)?;
    if question_text.trim().is_empty() {
        return Err(AppError::SchemaViolation(format!(
            "field `{}` must be a non-empty string",
            text_path
        )));
    }

    let options = options
        .iter()
        .enumerate()
        .map(|(j, option)| {
            let option_path = format!("{}.options[{}]", path, j);
            if option.is_null() {
                return Err(missing(&option_path));
            }
            string_field(option, &option_path)
        })
        .collect::<AppResult<Vec<_>>>()?;

    let explanation_path = format!("{}.explanation", path);
    let explanation =
        string_field(required(object, "explanation", &explanation_path)?, &explanation_path)?;

    Ok(Question {
        question_text,
        options,
        correct_answer_index,
        explanation,
    })
}

fn decode(raw_text: &str) -> AppResult<Value> {
    let trimmed = raw_text.trim();
    let payload = CODE_FENCE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or(trimmed, |m| m.as_str());

    match serde_json::from_str(payload) {
        Ok(value) => Ok(value),
        Err(err) => first_embedded_value(payload).ok_or_else(|| {
                AppError::SchemaViolation(format!(
                    "model output is not valid JSON ({}): {}",
                    err,
                    clip(payload)
                ))
            }),
    }
}

/// First complete JSON value starting at the first `{`; trailing text is ignored.
fn first_embedded_value(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    serde_json::Deserializer::from_str(&text[start..])
        .into_iter::<Value>()
        .next()?
        .ok()
}

fn required<'a>(object: &'a Map<String, Value>, key: &str, path: &str) -> AppResult<&'a Value> {
    match object.get(key) {
        None | Some(Value::Null) => Err(missing(path)),
        Some(value) => Ok(value),
    }
}

fn string_field(value: &Value, path: &str) -> AppResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| violation(path, "a string", value))
}

/// Integers, integral floats and numeric strings are accepted as indices.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn missing(path: &str) -> AppError {
    AppError::SchemaViolation(format!("missing required field `{}`", path))
}

fn violation(path: &str, expected: &str, received: &Value) -> AppError {
    AppError::SchemaViolation(format!(
        "field `{}` must be {}, received {}",
        path,
        expected,
        describe(received)
    ))
}

fn describe(value: &Value) -> String {
    clip(&value.to_string())
}

fn clip(text: &str) -> String {
    match text.char_indices().nth(MAX_REPORTED_VALUE_CHARS) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
