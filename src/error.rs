// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
///
/// Every generation-pipeline failure carries its raw diagnostic payload
/// (`detail` or `raw`) so callers can debug prompt or model drift; nothing
/// is flattened into a generic message.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request (bad topic, bad session indices)
    BadRequest(String),

    // 404 Not Found (no active session)
    NotFound(String),

    // 500: credential missing, operator-fixable
    Config(String),

    // 500: non-2xx or transport failure talking to the LLM service;
    // `detail` carries the upstream body verbatim
    Upstream { message: String, detail: String },

    // 500: upstream body was not valid JSON; `raw` carries the body
    EnvelopeParse { message: String, raw: String },

    // 500: no known envelope shape yielded text; `raw` carries the envelope
    EmptyContent { raw: String },

    // 500: generated text was not a JSON array even after recovery
    // stripping; `raw` carries the original text
    ContentParse { message: String, raw: String },

    // 500: parsed JSON does not match the quiz shape; the message names
    // the offending item index and field
    Schema(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Config(msg)
            | AppError::Schema(msg) => write!(f, "{}", msg),
            AppError::Upstream { message, .. }
            | AppError::EnvelopeParse { message, .. }
            | AppError::ContentParse { message, .. } => write!(f, "{}", message),
            AppError::EmptyContent { .. } => {
                write!(f, "Upstream response contained no generated text")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
            AppError::Upstream { message, detail } => {
                tracing::error!("Upstream error: {}: {}", message, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message, "detail": detail }),
                )
            }
            AppError::EnvelopeParse { message, raw } => {
                tracing::error!("Envelope parse error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message, "raw": raw }),
                )
            }
            AppError::EmptyContent { raw } => {
                tracing::error!("No generated text found in upstream envelope");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Upstream response contained no generated text",
                        "raw": raw,
                    }),
                )
            }
            AppError::ContentParse { message, raw } => {
                tracing::error!("Content parse error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message, "raw": raw }),
                )
            }
            AppError::Schema(msg) => {
                tracing::error!("Schema error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}
