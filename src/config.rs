// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Number of questions a generation request asks the upstream model for.
pub const QUIZ_QUESTION_COUNT: usize = 5;

/// Number of choices every question must carry.
pub const QUIZ_CHOICE_COUNT: usize = 4;

#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream service credential. Absence is surfaced per request as a
    /// configuration error instead of a startup panic, so the server can
    /// come up before the secret is provisioned.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Bounded deadline for the single upstream call, in seconds.
    pub upstream_timeout_secs: u64,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let model = env::var("QUIZ_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let temperature = env::var("QUIZ_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.7);

        let max_output_tokens = env::var("QUIZ_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(800);

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self {
            openai_api_key,
            openai_base_url,
            model,
            temperature,
            max_output_tokens,
            upstream_timeout_secs,
            rust_log,
            port,
        }
    }
}
