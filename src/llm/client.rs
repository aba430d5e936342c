// src/llm/client.rs

use std::time::Duration;

use serde_json::{Value, json};

use crate::{config::Config, error::AppError};

use super::prompt::SYSTEM_PROMPT;

/// Thin client for the upstream text-completion service.
///
/// Holds the shared connection pool plus the fixed generation parameters
/// (model, temperature, output cap) from configuration; callers only supply
/// the prompt. Every outcome crosses the boundary as a `Result`: transport
/// failures, non-2xx statuses and unparseable bodies are all returned as
/// described errors, never panics.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: Config,
}

impl UpstreamClient {
    pub fn new(http: reqwest::Client, config: Config) -> Self {
        Self { http, config }
    }

    /// Sends one completion request and returns the parsed response
    /// envelope.
    ///
    /// * Fails fast with a configuration error when the credential is
    ///   absent, before any network cost is spent.
    /// * Non-2xx statuses carry the upstream body verbatim in `detail`.
    /// * A 2xx body that is not valid JSON carries the raw body.
    ///
    /// The call runs under a bounded deadline; a timeout surfaces as an
    /// upstream error. Transient failures are surfaced immediately rather
    /// than auto-retried, and the caller offers "try again".
    pub async fn generate(&self, prompt: &str) -> Result<Value, AppError> {
        let api_key = self
            .config
            .openai_api_key
            .as_deref()
            .ok_or_else(|| AppError::Config("OPENAI_API_KEY is not set".to_string()))?;

        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_output_tokens,
        });

        let url = format!(
            "{}/chat/completions",
            self.config.openai_base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .timeout(Duration::from_secs(self.config.upstream_timeout_secs))
            .send()
            .await
            .map_err(|e| AppError::Upstream {
                message: "Upstream request failed".to_string(),
                detail: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AppError::Upstream {
            message: "Failed to read upstream response body".to_string(),
            detail: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(AppError::Upstream {
                message: format!("Upstream service error ({})", status.as_u16()),
                detail: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AppError::EnvelopeParse {
            message: format!("Upstream response is not valid JSON: {}", e),
            raw: body,
        })
    }
}
