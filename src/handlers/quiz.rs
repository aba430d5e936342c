// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    llm::{client::UpstreamClient, extract, parse, prompt, validate},
    models::quiz::{GenerateQuizRequest, QuizSet, SelectRequest},
    session::QuizSession,
    state::{AppState, SessionSlot},
};

/// Generates a quiz for the requested topic.
///
/// * Validates and trims the topic.
/// * Runs the generation pipeline: prompt -> upstream call -> text
///   extraction -> recovery parse -> schema validation.
/// * On success, installs a fresh session for the quiz and returns
///   `{ topic, quiz }`. The first pipeline failure short-circuits with its
///   diagnostic payload; no partial quiz is ever returned.
pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(payload): Json<GenerateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let topic = payload.topic.unwrap_or_default().trim().to_string();
    if topic.is_empty() {
        return Err(AppError::BadRequest("Topic must not be empty".to_string()));
    }

    let prompt = prompt::build_quiz_prompt(&topic);
    let client = UpstreamClient::new(state.http.clone(), state.config.clone());
    let envelope = client.generate(&prompt).await?;
    let text = extract::extract_text(&envelope)?;
    let candidates = parse::parse_quiz_array(&text)?;
    let items = validate::validate_items(candidates)?;

    tracing::info!("Generated {} questions for topic '{}'", items.len(), topic);

    let quiz = QuizSet { topic, items };
    let response = json!({ "topic": quiz.topic, "quiz": quiz.items });

    // A freshly accepted quiz replaces whatever session was active.
    let mut session = state.session.lock().await;
    *session = Some(QuizSession::new(quiz));

    Ok(Json(response))
}

/// Returns the current session snapshot, or 404 when no quiz has been
/// generated yet.
pub async fn get_session(
    State(sessions): State<SessionSlot>,
) -> Result<impl IntoResponse, AppError> {
    let guard = sessions.lock().await;
    let session = guard
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No active quiz session".to_string()))?;

    Ok(Json(session.view()))
}

/// Records an answer choice for one question of the active session.
///
/// Selection attempts on a submitted session are silently ignored (the
/// finished attempt is read-only); out-of-range indices are rejected.
pub async fn select_answer(
    State(sessions): State<SessionSlot>,
    Json(payload): Json<SelectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut guard = sessions.lock().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| AppError::NotFound("No active quiz session".to_string()))?;

    session
        .select(payload.question, payload.choice)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(Json(session.view()))
}

/// Submits the active session and returns the score.
///
/// Scoring counts the questions whose selection matches the answer index;
/// unanswered questions never match. Submitting an already submitted
/// session returns the stored score without re-scoring.
pub async fn submit_quiz(
    State(sessions): State<SessionSlot>,
) -> Result<impl IntoResponse, AppError> {
    let mut guard = sessions.lock().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| AppError::NotFound("No active quiz session".to_string()))?;

    let score = session.submit();

    Ok(Json(json!({
        "score": score,
        "total": session.quiz().items.len(),
        "submitted": true,
    })))
}

/// Resets the active session for another attempt at the same quiz: all
/// selections return to unanswered and the score is cleared. Generation is
/// not re-requested.
pub async fn reset_quiz(
    State(sessions): State<SessionSlot>,
) -> Result<impl IntoResponse, AppError> {
    let mut guard = sessions.lock().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| AppError::NotFound("No active quiz session".to_string()))?;

    session.reset();

    Ok(Json(session.view()))
}
