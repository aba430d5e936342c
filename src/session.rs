// src/session.rs

use std::fmt;

use crate::models::quiz::{QuizSet, SessionView};

/// Rejected `select` calls. Out-of-range indices are a caller contract
/// violation and are reported instead of being clamped or ignored.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    QuestionOutOfRange { question: usize, total: usize },
    ChoiceOutOfRange { question: usize, choice: usize, total: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::QuestionOutOfRange { question, total } => write!(
                f,
                "Question index {} is out of range (quiz has {} questions)",
                question, total
            ),
            SessionError::ChoiceOutOfRange {
                question,
                choice,
                total,
            } => write!(
                f,
                "Choice index {} is out of range for question {} ({} choices)",
                choice, question, total
            ),
        }
    }
}

impl std::error::Error for SessionError {}

/// State machine over one validated quiz.
///
/// * `Active`: selections may change, no score exists yet.
/// * `Submitted`: the score is fixed and selections are frozen; further
///   `select` calls are silently ignored (a finished attempt is read-only).
/// * `reset` returns to `Active` with all questions unanswered, keeping the
///   same quiz; it never re-requests generation.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: QuizSet,
    selections: Vec<Option<usize>>,
    submitted: bool,
    score: Option<usize>,
}

impl QuizSession {
    /// Starts a session with every question unanswered.
    pub fn new(quiz: QuizSet) -> Self {
        let selections = vec![None; quiz.items.len()];
        Self {
            quiz,
            selections,
            submitted: false,
            score: None,
        }
    }

    pub fn quiz(&self) -> &QuizSet {
        &self.quiz
    }

    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn score(&self) -> Option<usize> {
        self.score
    }

    /// Records a choice for a question. No-op once submitted; out-of-range
    /// indices are rejected in either state.
    pub fn select(&mut self, question: usize, choice: usize) -> Result<(), SessionError> {
        let total = self.quiz.items.len();
        let item = self
            .quiz
            .items
            .get(question)
            .ok_or(SessionError::QuestionOutOfRange { question, total })?;

        if choice >= item.choices.len() {
            return Err(SessionError::ChoiceOutOfRange {
                question,
                choice,
                total: item.choices.len(),
            });
        }

        if self.submitted {
            return Ok(());
        }

        self.selections[question] = Some(choice);
        Ok(())
    }

    /// Computes the score (count of selections matching the answer index;
    /// unanswered never matches) and freezes the session. Calling again
    /// while submitted returns the stored score without re-scoring.
    pub fn submit(&mut self) -> usize {
        if let Some(score) = self.score {
            return score;
        }

        let score = self
            .selections
            .iter()
            .zip(&self.quiz.items)
            .filter(|(selected, item)| **selected == Some(item.answer_index))
            .count();

        self.score = Some(score);
        self.submitted = true;
        score
    }

    /// Clears all selections and the score, returning to `Active` with the
    /// same quiz. Legal in any state.
    pub fn reset(&mut self) {
        self.selections = vec![None; self.quiz.items.len()];
        self.submitted = false;
        self.score = None;
    }

    /// Snapshot for the session endpoints.
    pub fn view(&self) -> SessionView {
        SessionView {
            topic: self.quiz.topic.clone(),
            quiz: self.quiz.items.clone(),
            selections: self.selections.to_vec(),
            submitted: self.submitted,
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::QuizItem;

    fn quiz_with_answers(answers: &[usize]) -> QuizSet {
        let items = answers
            .iter()
            .enumerate()
            .map(|(i, &answer_index)| QuizItem {
                question: format!("Question {}", i + 1),
                choices: vec![
                    "A".to_string(),
                    "B".to_string(),
                    "C".to_string(),
                    "D".to_string(),
                ],
                answer_index,
            })
            .collect();

        QuizSet {
            topic: "test".to_string(),
            items,
        }
    }

    #[test]
    fn new_session_starts_unanswered() {
        let session = QuizSession::new(quiz_with_answers(&[0, 1, 2]));
        assert_eq!(session.selections(), &[None, None, None]);
        assert!(!session.submitted());
        assert_eq!(session.score(), None);
    }

    #[test]
    fn score_counts_matching_indices() {
        // Selections [0,1,2,3,0] against answers [0,0,2,3,1] -> 3 correct.
        let mut session = QuizSession::new(quiz_with_answers(&[0, 0, 2, 3, 1]));
        for (question, choice) in [0, 1, 2, 3, 0].into_iter().enumerate() {
            session.select(question, choice).unwrap();
        }
        assert_eq!(session.submit(), 3);
    }

    #[test]
    fn unanswered_questions_never_match() {
        let mut session = QuizSession::new(quiz_with_answers(&[0, 1]));
        session.select(0, 0).unwrap();
        assert_eq!(session.submit(), 1);
    }

    #[test]
    fn score_is_bounded() {
        let mut session = QuizSession::new(quiz_with_answers(&[1, 1, 1]));
        for question in 0..3 {
            session.select(question, 1).unwrap();
        }
        let score = session.submit();
        assert!(score <= 3);
        assert_eq!(score, 3);
    }

    #[test]
    fn submit_is_idempotent() {
        let mut session = QuizSession::new(quiz_with_answers(&[2, 2]));
        session.select(0, 2).unwrap();
        let first = session.submit();
        // A second submit must not re-score, even if it could double-count.
        let second = session.submit();
        assert_eq!(first, 1);
        assert_eq!(second, 1);
    }

    #[test]
    fn selections_freeze_after_submit() {
        let mut session = QuizSession::new(quiz_with_answers(&[0]));
        session.select(0, 3).unwrap();
        session.submit();

        // Silently ignored, not an error.
        session.select(0, 0).unwrap();
        assert_eq!(session.selections(), &[Some(3)]);
        assert_eq!(session.score(), Some(0));
    }

    #[test]
    fn out_of_range_select_is_rejected() {
        let mut session = QuizSession::new(quiz_with_answers(&[0, 1]));
        assert_eq!(
            session.select(5, 0),
            Err(SessionError::QuestionOutOfRange {
                question: 5,
                total: 2
            })
        );
        assert_eq!(
            session.select(0, 4),
            Err(SessionError::ChoiceOutOfRange {
                question: 0,
                choice: 4,
                total: 4
            })
        );
        assert_eq!(session.selections(), &[None, None]);
    }

    #[test]
    fn reset_restores_active_state() {
        let mut session = QuizSession::new(quiz_with_answers(&[0, 1, 2]));
        session.select(0, 0).unwrap();
        session.select(1, 1).unwrap();
        session.submit();

        session.reset();
        assert_eq!(session.selections(), &[None, None, None]);
        assert!(!session.submitted());
        assert_eq!(session.score(), None);

        // The same quiz is retained and can be re-scored.
        session.select(2, 2).unwrap();
        assert_eq!(session.submit(), 1);
    }

    #[test]
    fn reset_while_active_clears_selections() {
        let mut session = QuizSession::new(quiz_with_answers(&[0]));
        session.select(0, 0).unwrap();
        session.reset();
        assert_eq!(session.selections(), &[None]);
    }
}
