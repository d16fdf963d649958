//! Best-effort parsing of model replies into domain records.
//!
//! The model is asked for a JSON array but often wraps it in prose or a
//! markdown fence, so the parser slices from the first `[` to the last `]`
//! before deserializing. Conversion stops at the first malformed entry,
//! keeping whatever parsed before it; a reply that yields nothing degrades
//! to placeholder records.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::{Flashcard, QuizQuestion};

/// Maximum records taken from a single reply.
const MAX_ITEMS: usize = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireQuestion {
    question: String,
    options: Vec<String>,
    correct_option: usize,
}

/// Parse a quiz reply into at most [`MAX_ITEMS`] questions.
///
/// Yields two placeholder questions when nothing usable parsed; an empty
/// vec only when the reply was a well-formed empty array.
pub fn parse_quiz(reply: &str) -> Vec<QuizQuestion> {
    let values = match array_slice(reply) {
        Some(values) => values,
        None => {
            warn!("quiz reply did not contain a JSON array");
            return fallback_questions();
        }
    };

    let mut questions = Vec::new();
    let mut malformed = false;
    for value in values.into_iter().take(MAX_ITEMS) {
        match serde_json::from_value::<WireQuestion>(value) {
            Ok(wire) => {
                questions.push(QuizQuestion::new(
                    wire.question,
                    wire.options,
                    wire.correct_option,
                ));
            }
            Err(e) => {
                warn!(error = %e, parsed = questions.len(), "malformed quiz entry, stopping");
                malformed = true;
                break;
            }
        }
    }

    if malformed && questions.is_empty() {
        return fallback_questions();
    }
    questions
}

/// Parse a flashcard reply, padding the result to exactly [`MAX_ITEMS`]
/// cards when the array itself was well formed.
pub fn parse_flashcards(reply: &str) -> Vec<Flashcard> {
    let values = match array_slice(reply) {
        Some(values) => values,
        None => {
            warn!("flashcard reply did not contain a JSON array");
            return fallback_flashcards();
        }
    };

    let mut cards = Vec::new();
    for value in values.into_iter().take(MAX_ITEMS) {
        match serde_json::from_value::<Flashcard>(value) {
            Ok(card) => cards.push(card),
            Err(e) => {
                warn!(error = %e, parsed = cards.len(), "malformed flashcard entry, stopping");
                // Partial results are kept unpadded; a fully unusable reply
                // degrades to the fallback set.
                if cards.is_empty() {
                    return fallback_flashcards();
                }
                return cards;
            }
        }
    }

    while cards.len() < MAX_ITEMS {
        cards.push(Flashcard::new(
            format!("Important concept {}", cards.len() + 1),
            "This is a placeholder for missing content.",
        ));
    }
    cards
}

/// Slice `reply` from the first `[` to the last `]` and parse it as a JSON
/// array. Tolerates prose and markdown fences around the array.
fn array_slice(reply: &str) -> Option<Vec<Value>> {
    let trimmed = reply.trim();
    let start = trimmed.find('[')?;
    let end = trimmed.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&trimmed[start..=end]).ok()
}

fn fallback_questions() -> Vec<QuizQuestion> {
    let options: Vec<String> = ["Option 1", "Option 2", "Option 3", "Option 4"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    (1..=2)
        .map(|i| {
            QuizQuestion::new(
                format!("Failed to parse API response. Question {i}?"),
                options.clone(),
                0,
            )
        })
        .collect()
}

fn fallback_flashcards() -> Vec<Flashcard> {
    (1..=MAX_ITEMS)
        .map(|i| {
            Flashcard::new(
                format!("Key concept {i}"),
                "Failed to generate content. Please try again.",
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIZ_REPLY: &str = r#"[
        {"question": "What is Rust?", "options": ["A language", "A fungus", "A game", "A film"], "correctOption": 0},
        {"question": "Who compiles it?", "options": ["rustc", "javac", "gcc", "tsc"], "correctOption": 0}
    ]"#;

    #[test]
    fn test_parse_quiz_plain_array() {
        let questions = parse_quiz(QUIZ_REPLY);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "What is Rust?");
        assert_eq!(questions[0].correct_option, 0);
    }

    #[test]
    fn test_parse_quiz_with_markdown_fence() {
        let reply = format!("Here you go!\n```json\n{QUIZ_REPLY}\n```\nEnjoy.");
        let questions = parse_quiz(&reply);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_parse_quiz_caps_at_ten() {
        let entries: Vec<String> = (0..15)
            .map(|i| {
                format!(
                    r#"{{"question": "Q{i}?", "options": ["a","b","c","d"], "correctOption": 1}}"#
                )
            })
            .collect();
        let reply = format!("[{}]", entries.join(","));
        assert_eq!(parse_quiz(&reply).len(), 10);
    }

    #[test]
    fn test_parse_quiz_pads_short_options() {
        let reply = r#"[{"question": "Q?", "options": ["only one"], "correctOption": 0}]"#;
        let questions = parse_quiz(reply);
        assert_eq!(questions[0].options[1], "N/A");
        assert_eq!(questions[0].options[3], "N/A");
    }

    #[test]
    fn test_parse_quiz_garbage_yields_placeholders() {
        let questions = parse_quiz("Sorry, I can't help with that.");
        assert_eq!(questions.len(), 2);
        assert!(questions[0].question.starts_with("Failed to parse"));
    }

    #[test]
    fn test_parse_quiz_keeps_entries_before_malformed_one() {
        let reply = r#"[
            {"question": "Good?", "options": ["a","b","c","d"], "correctOption": 2},
            {"question": "Missing fields"}
        ]"#;
        let questions = parse_quiz(reply);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Good?");
    }

    #[test]
    fn test_parse_quiz_empty_array_is_empty() {
        assert!(parse_quiz("[]").is_empty());
    }

    #[test]
    fn test_parse_flashcards_pads_to_ten() {
        let reply = r#"[{"question": "Front?", "answer": "Back."}]"#;
        let cards = parse_flashcards(reply);
        assert_eq!(cards.len(), 10);
        assert_eq!(cards[0].question, "Front?");
        assert_eq!(cards[1].question, "Important concept 2");
    }

    #[test]
    fn test_parse_flashcards_garbage_yields_fallback_set() {
        let cards = parse_flashcards("no json here");
        assert_eq!(cards.len(), 10);
        assert_eq!(cards[0].question, "Key concept 1");
        assert_eq!(cards[0].answer, "Failed to generate content. Please try again.");
    }

    #[test]
    fn test_parse_flashcards_partial_kept_unpadded() {
        let reply = r#"[
            {"question": "Ok?", "answer": "Yes."},
            {"question": "Broken"}
        ]"#;
        let cards = parse_flashcards(reply);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].answer, "Yes.");
    }

    #[test]
    fn test_array_slice_ignores_surrounding_prose() {
        let values = array_slice("prefix [1, 2, 3] suffix").unwrap();
        assert_eq!(values.len(), 3);
        assert!(array_slice("] backwards [").is_none());
    }
}
