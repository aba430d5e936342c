// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One generated four-choice question.
///
/// Serialized camelCase (`answerIndex`) to match the wire shape the
/// generation prompt demands from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub choices: Vec<String>,
    #[serde(rename = "answerIndex")]
    pub answer_index: usize,
}

/// A validated quiz for one topic. Only ever constructed from items that
/// passed the schema gate; immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSet {
    pub topic: String,
    pub items: Vec<QuizItem>,
}

/// DTO for requesting quiz generation. `genre` is accepted as an alias for
/// `topic` (same field in the source domain wording). The field is optional
/// at the serde layer so an absent topic reports a 400 rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[serde(alias = "genre")]
    #[validate(length(min = 1, max = 200))]
    pub topic: Option<String>,
}

/// DTO for answering one question in the active session.
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub question: usize,
    pub choice: usize,
}

/// Snapshot of the active session returned by the session endpoints.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub topic: String,
    pub quiz: Vec<QuizItem>,
    pub selections: Vec<Option<usize>>,
    pub submitted: bool,
    pub score: Option<usize>,
}
