// src/routes.rs

use std::sync::Arc;

use axum::{Router, http::Method, routing::{get, post}};
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::quiz, state::AppState};

/// Assembles the main application router.
///
/// * Mounts the quiz generation endpoint and the session routes.
/// * Applies global middleware (Trace, CORS).
/// * Rate-limits generation only; each call spends upstream credits, while
///   session mutations are local and cheap.
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(5)
        .finish()
        .unwrap();

    let governor_conf = Arc::new(governor_conf);

    let quiz_routes = Router::new()
        .route("/", post(quiz::generate_quiz))
        .layer(GovernorLayer::new(governor_conf))
        .merge(
            Router::new()
                .route("/session", get(quiz::get_session))
                .route("/select", post(quiz::select_answer))
                .route("/submit", post(quiz::submit_quiz))
                .route("/reset", post(quiz::reset_quiz)),
        );

    Router::new()
        .nest("/api/quiz", quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
