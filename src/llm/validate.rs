// src/llm/validate.rs

use serde_json::Value;

use crate::{config::QUIZ_CHOICE_COUNT, error::AppError, models::quiz::QuizItem};

/// Checks candidate items against the quiz shape and builds `QuizItem`s.
///
/// The first violation stops validation and names the offending item index
/// and field. A quiz only ever reaches callers through this gate, so no
/// partially valid quiz is exposed upward.
pub fn validate_items(candidates: Vec<Value>) -> Result<Vec<QuizItem>, AppError> {
    if candidates.is_empty() {
        return Err(AppError::Schema(
            "Generated quiz contains no questions".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        items.push(validate_item(index, candidate)?);
    }
    Ok(items)
}

fn validate_item(index: usize, candidate: &Value) -> Result<QuizItem, AppError> {
    let question = candidate
        .get("question")
        .and_then(Value::as_str)
        .ok_or_else(|| schema_error(index, "question", "must be a string".to_string()))?;
    if question.trim().is_empty() {
        return Err(schema_error(index, "question", "must not be empty".to_string()));
    }

    let choice_values = candidate
        .get("choices")
        .and_then(Value::as_array)
        .ok_or_else(|| schema_error(index, "choices", "must be an array".to_string()))?;
    if choice_values.len() != QUIZ_CHOICE_COUNT {
        return Err(schema_error(
            index,
            "choices",
            format!(
                "must contain exactly {} entries, got {}",
                QUIZ_CHOICE_COUNT,
                choice_values.len()
            ),
        ));
    }

    let mut choices = Vec::with_capacity(QUIZ_CHOICE_COUNT);
    for choice in choice_values {
        let text = choice
            .as_str()
            .ok_or_else(|| schema_error(index, "choices", "entries must be strings".to_string()))?;
        choices.push(text.to_string());
    }

    let answer_index = candidate
        .get("answerIndex")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            schema_error(index, "answerIndex", "must be a non-negative integer".to_string())
        })? as usize;
    if answer_index >= choices.len() {
        return Err(schema_error(
            index,
            "answerIndex",
            format!("must be below {}, got {}", choices.len(), answer_index),
        ));
    }

    Ok(QuizItem {
        question: question.to_string(),
        choices,
        answer_index,
    })
}

fn schema_error(index: usize, field: &str, problem: String) -> AppError {
    AppError::Schema(format!("Quiz item {}: field '{}' {}", index, field, problem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(question: &str, choices: Value, answer_index: Value) -> Value {
        json!({ "question": question, "choices": choices, "answerIndex": answer_index })
    }

    fn four_choices() -> Value {
        json!(["a", "b", "c", "d"])
    }

    #[test]
    fn accepts_structurally_correct_items() {
        let candidates = vec![
            item("First?", four_choices(), json!(0)),
            item("Second?", four_choices(), json!(3)),
        ];
        let items = validate_items(candidates).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].answer_index, 0);
        assert_eq!(items[1].choices.len(), 4);
    }

    #[test]
    fn rejects_an_empty_quiz() {
        assert!(validate_items(vec![]).is_err());
    }

    #[test]
    fn rejects_wrong_choice_count_naming_the_item() {
        let candidates = vec![
            item("Fine?", four_choices(), json!(0)),
            item("Short?", json!(["a", "b", "c"]), json!(0)),
        ];
        let err = validate_items(candidates).unwrap_err();
        match err {
            AppError::Schema(msg) => {
                assert!(msg.contains("item 1"));
                assert!(msg.contains("choices"));
            }
            other => panic!("expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_answer_index() {
        let err = validate_items(vec![item("Q?", four_choices(), json!(4))]).unwrap_err();
        match err {
            AppError::Schema(msg) => assert!(msg.contains("answerIndex")),
            other => panic!("expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn rejects_negative_and_fractional_answer_index() {
        assert!(validate_items(vec![item("Q?", four_choices(), json!(-1))]).is_err());
        assert!(validate_items(vec![item("Q?", four_choices(), json!(1.5))]).is_err());
    }

    #[test]
    fn rejects_missing_or_empty_question() {
        let missing = json!({ "choices": ["a", "b", "c", "d"], "answerIndex": 0 });
        assert!(validate_items(vec![missing]).is_err());

        let err = validate_items(vec![item("   ", four_choices(), json!(0))]).unwrap_err();
        match err {
            AppError::Schema(msg) => assert!(msg.contains("question")),
            other => panic!("expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_string_choices() {
        let err = validate_items(vec![item("Q?", json!(["a", "b", "c", 4]), json!(0))])
            .unwrap_err();
        match err {
            AppError::Schema(msg) => assert!(msg.contains("strings")),
            other => panic!("expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_object_items() {
        assert!(validate_items(vec![json!("just a string")]).is_err());
    }
}
