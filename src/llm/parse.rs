// src/llm/parse.rs

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::AppError;

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z0-9]*[ \t]*\r?\n?").unwrap());
static FENCE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```\s*$").unwrap());

/// Parses generated text into a JSON array of candidate quiz items.
///
/// Models reliably but not universally wrap JSON in Markdown code fences
/// despite being told not to, so a failed direct parse gets exactly one
/// retry after stripping a leading/trailing fence marker (with or without a
/// language tag). Valid JSON that is not an array counts as a failure. Both
/// attempts failing returns the original raw text for diagnostics.
pub fn parse_quiz_array(text: &str) -> Result<Vec<Value>, AppError> {
    if let Some(items) = try_parse_array(text) {
        return Ok(items);
    }

    let stripped = strip_code_fence(text);
    if let Some(items) = try_parse_array(&stripped) {
        return Ok(items);
    }

    Err(AppError::ContentParse {
        message: "Generated text is not a JSON array".to_string(),
        raw: text.to_string(),
    })
}

fn try_parse_array(text: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    let opened = FENCE_OPEN.replace(trimmed, "");
    FENCE_CLOSE.replace(&opened, "").into_owned()
}
