//! Turns a model's quiz reply into validated [`QuizQuestion`]s.
//!
//! The reply is free text that usually, but not always, carries a JSON array
//! of question objects. Extraction tries a fixed list of strategies in order;
//! validation failures never reach the caller of [`parse_quiz`], which
//! substitutes a deterministic placeholder quiz instead.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::domain::{quiz_question::OPTION_COUNT, QuizQuestion};

static FENCED_JSON_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```json\s*(\[[\s\S]*?\])\s*```")
        .expect("FENCED_JSON_ARRAY is a valid regex pattern")
});

static BARE_JSON_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("BARE_JSON_ARRAY is a valid regex pattern")
});

const FALLBACK_OPTIONS: [&str; OPTION_COUNT] = ["Option A", "Option B", "Option C", "Option D"];
const FALLBACK_EXPLANATION: &str = "This is a fallback explanation.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizParseError {
    #[error("Quiz payload is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Quiz data must be a list of questions")]
    NotAList,

    #[error("Quiz data contains no questions")]
    Empty,

    #[error("Quiz item {index} must be an object")]
    NotAnObject { index: usize },

    #[error("Quiz item {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Quiz item {index} field '{field}' must be a string")]
    NotAString { index: usize, field: &'static str },

    #[error("Quiz item {index} must have exactly 4 string options, found {found}")]
    WrongOptionCount { index: usize, found: usize },
}

/// A way of locating the JSON payload inside a raw reply.
pub type ExtractionStrategy = fn(&str) -> Option<&str>;

/// Tried in order; the first strategy returning `Some` wins.
pub const EXTRACTION_STRATEGIES: [(&str, ExtractionStrategy); 3] = [
    ("fenced", extract_fenced_block),
    ("bare", extract_bare_array),
    ("whole", extract_whole_text),
];

pub fn extract_fenced_block(raw: &str) -> Option<&str> {
    FENCED_JSON_ARRAY
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn extract_bare_array(raw: &str) -> Option<&str> {
    BARE_JSON_ARRAY.find(raw).map(|m| m.as_str())
}

pub fn extract_whole_text(raw: &str) -> Option<&str> {
    Some(raw)
}

pub fn extract_json_payload(raw: &str) -> &str {
    for (name, strategy) in EXTRACTION_STRATEGIES {
        if let Some(payload) = strategy(raw) {
            log::debug!("Quiz payload located by {} strategy", name);
            return payload;
        }
    }
    raw
}

/// Parses and validates a quiz reply, truncating to `num_questions`.
pub fn try_parse_quiz(
    raw: &str,
    num_questions: usize,
) -> Result<Vec<QuizQuestion>, QuizParseError> {
    let payload = extract_json_payload(raw);
    let value: Value =
        serde_json::from_str(payload).map_err(|e| QuizParseError::InvalidJson(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        _ => return Err(QuizParseError::NotAList),
    };
    if items.is_empty() {
        return Err(QuizParseError::Empty);
    }

    let mut questions = items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => question_from_fields(index, fields),
            _ => Err(QuizParseError::NotAnObject { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    questions.truncate(num_questions);
    Ok(questions)
}

/// Parses a quiz reply, falling back to placeholder questions on any error.
pub fn parse_quiz(raw: &str, subject: &str, num_questions: usize) -> Vec<QuizQuestion> {
    match try_parse_quiz(raw, num_questions) {
        Ok(questions) => questions,
        Err(e) => {
            log::warn!("Error parsing quiz response for subject {}: {}", subject, e);
            fallback_quiz(subject, num_questions)
        }
    }
}

pub fn fallback_quiz(subject: &str, num_questions: usize) -> Vec<QuizQuestion> {
    log::warn!("Using fallback quiz for {}", subject);
    (1..=num_questions)
        .map(|k| {
            QuizQuestion::new(
                format!("Sample {} question #{}", subject, k),
                FALLBACK_OPTIONS.map(String::from),
                FALLBACK_OPTIONS[0],
                FALLBACK_EXPLANATION,
            )
        })
        .collect()
}

fn question_from_fields(
    index: usize,
    fields: &Map<String, Value>,
) -> Result<QuizQuestion, QuizParseError> {
    for field in ["question", "options", "correct_answer"] {
        if !fields.contains_key(field) {
            return Err(QuizParseError::MissingField { index, field });
        }
    }

    let question = required_str(index, fields, "question")?;
    let correct_answer = scalar_text(&fields["correct_answer"]).ok_or(
        QuizParseError::NotAString {
            index,
            field: "correct_answer",
        },
    )?;
    let options = options_from(index, &fields["options"])?;

    let explanation = match fields.get("explanation").and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => format!("The correct answer is {}.", correct_answer),
    };

    Ok(QuizQuestion::new(question, options, correct_answer, explanation))
}

fn required_str(
    index: usize,
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<String, QuizParseError> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(QuizParseError::NotAString { index, field })
}

// Models sometimes answer with a bare number or boolean.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn options_from(index: usize, value: &Value) -> Result<[String; OPTION_COUNT], QuizParseError> {
    let list = value
        .as_array()
        .ok_or(QuizParseError::WrongOptionCount { index, found: 0 })?;

    let options: Vec<String> = list
        .iter()
        .map(|option| option.as_str().map(str::to_string))
        .collect::<Option<_>>()
        .ok_or(QuizParseError::NotAString {
            index,
            field: "options",
        })?;

    let found = options.len();
    options
        .try_into()
        .map_err(|_| QuizParseError::WrongOptionCount { index, found })
}
