//! The pipeline from document text to structured study content.
//!
//! One generation runs per user action, on a spawned task; the outcome is
//! handed back to the UI loop over an unbounded channel. Parsing of the
//! model reply is best-effort: a reply the parser cannot use degrades to
//! placeholder records rather than an error, matching the rest of the
//! fallback policy.

mod parse;

use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::document::{self, DocumentError, MAX_DOCUMENT_CHARS};
use crate::llm::{ApiError, LlmClient, prompts};
use crate::models::{Cheatsheet, Flashcard, QuizQuestion, StudyMode};

pub use parse::{parse_flashcards, parse_quiz};

/// In-band fallback text when cheatsheet generation fails anywhere in the
/// pipeline.
pub const CHEATSHEET_FALLBACK: &str = "Error generating cheatsheet. Please try again.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("the model returned no quiz questions, please try again")]
    EmptyQuiz,
}

/// Content produced by one generation run.
#[derive(Debug)]
pub enum Generated {
    Flashcards(Vec<Flashcard>),
    Quiz(Vec<QuizQuestion>),
    Cheatsheet(Cheatsheet),
}

/// Result of a generation task, tagged with the request id so the UI can
/// drop outcomes the user has already navigated away from.
#[derive(Debug)]
pub struct Outcome {
    pub generation: u64,
    pub result: Result<Generated, GenerateError>,
}

/// Spawn a generation task. Fire-and-forget: the task reports back over
/// `tx` and is never joined.
pub fn spawn(
    client: LlmClient,
    path: PathBuf,
    mode: StudyMode,
    generation: u64,
    tx: mpsc::UnboundedSender<Outcome>,
) {
    tokio::spawn(async move {
        let result = generate(&client, &path, mode).await;
        // Receiver gone means the app quit while we were in flight.
        let _ = tx.send(Outcome { generation, result });
    });
}

/// Run the full pipeline for one study mode.
pub async fn generate(
    client: &LlmClient,
    path: &std::path::Path,
    mode: StudyMode,
) -> Result<Generated, GenerateError> {
    info!(mode = mode.label(), path = %path.display(), "generating study content");

    match mode {
        StudyMode::Quiz => {
            let text = prompt_text(path)?;
            let reply = client
                .complete(&prompts::quiz(&text), mode.request_title())
                .await?;
            let questions = parse_quiz(&reply);
            if questions.is_empty() {
                return Err(GenerateError::EmptyQuiz);
            }
            info!(count = questions.len(), "quiz ready");
            Ok(Generated::Quiz(questions))
        }
        StudyMode::Flashcards => {
            let text = prompt_text(path)?;
            let reply = client
                .complete(&prompts::flashcards(&text), mode.request_title())
                .await?;
            let cards = parse_flashcards(&reply);
            info!(count = cards.len(), "flashcards ready");
            Ok(Generated::Flashcards(cards))
        }
        StudyMode::Cheatsheet => {
            // The cheatsheet reply is plain text, so failures are reported
            // in-band as sheet content rather than as an error screen.
            let text = match cheatsheet_reply(client, path).await {
                Ok(text) => text,
                Err(e) => {
                    error!(error = %e, "cheatsheet generation failed");
                    CHEATSHEET_FALLBACK.to_string()
                }
            };
            Ok(Generated::Cheatsheet(Cheatsheet::new(text)))
        }
    }
}

async fn cheatsheet_reply(
    client: &LlmClient,
    path: &std::path::Path,
) -> Result<String, GenerateError> {
    let text = prompt_text(path)?;
    let title = StudyMode::Cheatsheet.request_title();
    Ok(client.complete(&prompts::cheatsheet(&text), title).await?)
}

/// Extract and truncate the document text that goes into a prompt.
fn prompt_text(path: &std::path::Path) -> Result<String, GenerateError> {
    let text = document::extract_text(path)?;
    Ok(document::truncate(text, MAX_DOCUMENT_CHARS))
}
