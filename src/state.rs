// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::Mutex;

use crate::{config::Config, session::QuizSession};

/// Server-held slot for the single interactive quiz session. The mutex
/// serializes `select`/`submit`/`reset` mutations, which are not designed
/// for concurrent invocation.
pub type SessionSlot = Arc<Mutex<Option<QuizSession>>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
    pub session: SessionSlot,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            session: Arc::new(Mutex::new(None)),
        }
    }
}

impl FromRef<AppState> for SessionSlot {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}
