// src/llm/prompt.rs

use crate::config::{QUIZ_CHOICE_COUNT, QUIZ_QUESTION_COUNT};

/// System message pinning the strict-JSON persona for every generation call.
pub const SYSTEM_PROMPT: &str =
    "You are a quiz author. You always respond with strict JSON and nothing else.";

/// Builds the generation instruction for one topic.
///
/// The instruction names the topic, demands exactly
/// [`QUIZ_QUESTION_COUNT`] questions with [`QUIZ_CHOICE_COUNT`] choices
/// each, and demands the response be only a JSON array with no surrounding
/// prose. Total function over non-empty topics; kept minimal to hold down
/// token cost.
pub fn build_quiz_prompt(topic: &str) -> String {
    format!(
        "Create a multiple-choice quiz about the topic \"{topic}\".\n\
         Write exactly {QUIZ_QUESTION_COUNT} questions. Each question must have exactly \
         {QUIZ_CHOICE_COUNT} choices.\n\
         Respond with only a JSON array in this shape, with no explanation and no \
         surrounding prose:\n\
         [\n  {{\n    \"question\": \"question text\",\n    \"choices\": [\"choice 1\", \
         \"choice 2\", \"choice 3\", \"choice 4\"],\n    \"answerIndex\": 0\n  }}\n]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_topic() {
        let prompt = build_quiz_prompt("sushi");
        assert!(prompt.contains("\"sushi\""));
    }

    #[test]
    fn prompt_demands_question_and_choice_counts() {
        let prompt = build_quiz_prompt("chess");
        assert!(prompt.contains("exactly 5 questions"));
        assert!(prompt.contains("exactly 4 choices"));
    }

    #[test]
    fn prompt_forbids_prose_and_fixes_the_shape() {
        let prompt = build_quiz_prompt("space");
        assert!(prompt.contains("only a JSON array"));
        assert!(prompt.contains("no surrounding prose"));
        assert!(prompt.contains("\"answerIndex\""));
        assert!(prompt.contains("\"choices\""));
    }
}
