//! # zapio
//!
//! A terminal study aid: point it at a document (PDF, DOCX or TXT) and it
//! asks a chat-completion model to turn the text into flashcards, a
//! multiple-choice quiz, or a plain-text cheatsheet, then renders the
//! result as an interactive TUI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zapio::{Config, Zapio};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zapio::ZapioError> {
//!     let config = Config::load()?;
//!     let zapio = Zapio::new("notes.pdf".as_ref(), None, &config)?;
//!     zapio.run().await
//! }
//! ```

mod app;
pub mod config;
pub mod document;
pub mod generate;
pub mod llm;
pub mod logger;
pub mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

pub use app::{App, Screen};
pub use config::Config;
pub use models::{Cheatsheet, Flashcard, QuizQuestion, StudyMode};

use generate::{Generated, Outcome};
use llm::LlmClient;

/// Preview length shown on the selection screen.
const PREVIEW_CHARS: usize = 600;

/// Poll interval of the event loop; also the spinner tick.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Top-level error type.
#[derive(Debug, Error)]
pub enum ZapioError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Document(#[from] document::DocumentError),
    #[error("API client error: {0}")]
    Api(#[from] llm::ApiError),
    #[error("logger error: {0}")]
    Logger(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A Zapio session for one document.
pub struct Zapio {
    app: App,
    client: LlmClient,
    tx: mpsc::UnboundedSender<Outcome>,
    rx: mpsc::UnboundedReceiver<Outcome>,
    initial_mode: Option<StudyMode>,
}

impl Zapio {
    /// Load the document for preview and prepare the session.
    ///
    /// Fails fast on an unreadable or unsupported document and on a broken
    /// HTTP client, before the terminal is taken over.
    pub fn new(
        document: &Path,
        initial_mode: Option<StudyMode>,
        config: &Config,
    ) -> Result<Self, ZapioError> {
        let text = document::extract_text(document)?;
        let preview = document::preview(&text, PREVIEW_CHARS);

        let client = LlmClient::new(config)?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            app: App::new(document, preview),
            client,
            tx,
            rx,
            initial_mode,
        })
    }

    /// Run the session in the terminal.
    ///
    /// Takes over the terminal, displays the UI, and returns when the user
    /// quits.
    pub async fn run(mut self) -> Result<(), ZapioError> {
        // Restoring the terminal is handled by the guard's drop.
        let mut terminal = terminal::init()?;
        self.event_loop(&mut terminal).await
    }

    async fn event_loop(
        &mut self,
        terminal: &mut terminal::TerminalGuard,
    ) -> Result<(), ZapioError> {
        if let Some(mode) = self.initial_mode.take() {
            self.start_generation(mode);
        }

        loop {
            if self.app.should_quit {
                break;
            }

            self.app.tick();
            terminal.draw(|frame| ui::render(frame, &self.app))?;

            while let Ok(outcome) = self.rx.try_recv() {
                self.apply_outcome(outcome);
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_input(key.code);
                }
            }
        }

        Ok(())
    }

    /// Kick off a generation task and switch to the loading screen.
    fn start_generation(&mut self, mode: StudyMode) {
        let generation = self.app.begin_loading(mode);
        generate::spawn(
            self.client.clone(),
            self.app.document_path.clone(),
            mode,
            generation,
            self.tx.clone(),
        );
    }

    /// Apply a finished generation, unless the user has navigated away.
    fn apply_outcome(&mut self, outcome: Outcome) {
        if !self.app.accepts_generation(outcome.generation) {
            debug!(generation = outcome.generation, "dropping stale generation outcome");
            return;
        }

        match outcome.result {
            Ok(Generated::Flashcards(cards)) => self.app.show_flashcards(cards),
            Ok(Generated::Quiz(questions)) => self.app.show_quiz(questions),
            Ok(Generated::Cheatsheet(sheet)) => self.app.show_cheatsheet(sheet),
            Err(e) => self.app.show_error(e.to_string()),
        }
    }

    fn handle_input(&mut self, key: KeyCode) {
        match &self.app.screen {
            Screen::Selection { .. } => match key {
                KeyCode::Up | KeyCode::Char('k') => self.app.select_previous_mode(),
                KeyCode::Down | KeyCode::Char('j') => self.app.select_next_mode(),
                KeyCode::Enter => {
                    if let Some(mode) = self.app.selected_mode() {
                        self.start_generation(mode);
                    }
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.app.quit(),
                _ => {}
            },
            Screen::Loading { .. } => match key {
                KeyCode::Esc => self.app.cancel_loading(),
                KeyCode::Char('q') | KeyCode::Char('Q') => self.app.quit(),
                _ => {}
            },
            Screen::Flashcards { .. } => match key {
                KeyCode::Left | KeyCode::Char('h') => self.app.previous_card(),
                KeyCode::Right | KeyCode::Char('l') => self.app.next_card(),
                KeyCode::Enter | KeyCode::Char(' ') => self.app.flip_card(),
                KeyCode::Char('m') | KeyCode::Char('M') => self.app.return_home(),
                KeyCode::Char('q') | KeyCode::Char('Q') => self.app.quit(),
                _ => {}
            },
            Screen::Quiz { .. } => match key {
                KeyCode::Up | KeyCode::Char('k') => self.app.select_previous_option(),
                KeyCode::Down | KeyCode::Char('j') => self.app.select_next_option(),
                KeyCode::Enter | KeyCode::Char(' ') => self.app.submit_answer(),
                KeyCode::Left | KeyCode::Char('b') => self.app.previous_question(),
                KeyCode::Char('q') | KeyCode::Char('Q') => self.app.quit(),
                _ => {}
            },
            Screen::Result { .. } => match key {
                KeyCode::Char('r') | KeyCode::Char('R') => self.app.retake_quiz(),
                KeyCode::Char('m') | KeyCode::Char('M') => self.app.return_home(),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.app.quit(),
                _ => {}
            },
            Screen::Cheatsheet { .. } => match key {
                KeyCode::Up | KeyCode::Char('k') => self.app.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => self.app.scroll_down(),
                KeyCode::Char('m') | KeyCode::Char('M') => self.app.return_home(),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.app.quit(),
                _ => {}
            },
            Screen::Error { .. } => match key {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                    self.app.return_home()
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => self.app.quit(),
                _ => {}
            },
        }
    }
}
