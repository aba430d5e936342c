// src/llm/extract.rs

use serde_json::Value;

use crate::error::AppError;

/// Locates the model-generated text inside an upstream response envelope.
///
/// The upstream service has emitted its text under different top-level
/// shapes across API generations, so the extractor probes known shapes in
/// fixed priority order and returns the first non-empty text:
///
/// 1. flat `output_text` field;
/// 2. structured `output[].content[]` blocks with embedded `text`;
/// 3. legacy chat-style `choices[0].message.content`.
///
/// All shape knowledge lives here; the rest of the pipeline sees one
/// normalized string. When no shape yields text the whole envelope is
/// attached to the error for diagnostics.
pub fn extract_text(envelope: &Value) -> Result<String, AppError> {
    flat_output_text(envelope)
        .or_else(|| structured_output_text(envelope))
        .or_else(|| chat_message_text(envelope))
        .ok_or_else(|| AppError::EmptyContent {
            raw: envelope.to_string(),
        })
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn flat_output_text(envelope: &Value) -> Option<String> {
    envelope
        .get("output_text")
        .and_then(Value::as_str)
        .and_then(non_empty)
}

/// Concatenates the `text` fields of every content block under `output`.
fn structured_output_text(envelope: &Value) -> Option<String> {
    let output = envelope.get("output")?.as_array()?;

    let mut text = String::new();
    for entry in output {
        let Some(content) = entry.get("content").and_then(Value::as_array) else {
            continue;
        };
        for block in content {
            if let Some(fragment) = block.get("text").and_then(Value::as_str) {
                text.push_str(fragment);
            }
        }
    }

    non_empty(&text)
}

fn chat_message_text(envelope: &Value) -> Option<String> {
    envelope
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .and_then(non_empty)
}
