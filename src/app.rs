//! Application state machine.
//!
//! One screen is active at a time: selection, loading, flashcards, quiz,
//! result, cheatsheet, plus an error screen for failed generations.

use std::path::{Path, PathBuf};

use crate::models::{Cheatsheet, Flashcard, NUM_OPTIONS, QuizQuestion, StudyMode};

/// Currently displayed screen with its per-screen state.
#[derive(Debug)]
pub enum Screen {
    /// Choosing a study mode for the loaded document.
    Selection { cursor: usize },

    /// A generation task is in flight.
    Loading { mode: StudyMode, frame: usize },

    /// Browsing generated flashcards.
    Flashcards {
        cards: Vec<Flashcard>,
        index: usize,
        flipped: bool,
    },

    /// Answering generated quiz questions.
    Quiz {
        questions: Vec<QuizQuestion>,
        index: usize,
        selected: usize,
        answers: Vec<Option<usize>>,
    },

    /// Quiz finished; score and retake options.
    Result {
        questions: Vec<QuizQuestion>,
        score: usize,
    },

    /// Reading a generated cheatsheet.
    Cheatsheet { sheet: Cheatsheet, scroll: usize },

    /// A generation failed outright.
    Error { message: String },
}

pub struct App {
    pub screen: Screen,
    pub document_path: PathBuf,
    pub document_name: String,
    pub preview: String,
    pub should_quit: bool,
    /// Monotonic id of the latest generation request; outcomes carrying an
    /// older id are stale and dropped.
    generation: u64,
}

impl App {
    pub fn new(document_path: &Path, preview: String) -> Self {
        let document_name = document_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        Self {
            screen: Screen::Selection { cursor: 0 },
            document_path: document_path.to_path_buf(),
            document_name,
            preview,
            should_quit: false,
            generation: 0,
        }
    }

    /// Advance time-based state (the loading spinner). Called once per
    /// draw tick.
    pub fn tick(&mut self) {
        if let Screen::Loading { frame, .. } = &mut self.screen {
            *frame = frame.wrapping_add(1);
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ── Selection ─────────────────────────────────────────────────────────

    pub fn selected_mode(&self) -> Option<StudyMode> {
        match self.screen {
            Screen::Selection { cursor } => StudyMode::ALL.get(cursor).copied(),
            _ => None,
        }
    }

    pub fn select_next_mode(&mut self) {
        if let Screen::Selection { cursor } = &mut self.screen {
            *cursor = (*cursor + 1) % StudyMode::ALL.len();
        }
    }

    pub fn select_previous_mode(&mut self) {
        if let Screen::Selection { cursor } = &mut self.screen {
            *cursor = (*cursor + StudyMode::ALL.len() - 1) % StudyMode::ALL.len();
        }
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Enter the loading screen and return the id the generation task must
    /// report back with.
    pub fn begin_loading(&mut self, mode: StudyMode) -> u64 {
        self.generation += 1;
        self.screen = Screen::Loading { mode, frame: 0 };
        self.generation
    }

    /// Abandon an in-flight generation and return to selection. The stale
    /// outcome is dropped when it arrives because its id no longer matches.
    pub fn cancel_loading(&mut self) {
        if matches!(self.screen, Screen::Loading { .. }) {
            self.generation += 1;
            self.return_home();
        }
    }

    /// Whether an outcome with this id should still be applied.
    pub fn accepts_generation(&self, generation: u64) -> bool {
        generation == self.generation && matches!(self.screen, Screen::Loading { .. })
    }

    // ── Screen transitions ────────────────────────────────────────────────

    pub fn show_flashcards(&mut self, cards: Vec<Flashcard>) {
        self.screen = Screen::Flashcards {
            cards,
            index: 0,
            flipped: false,
        };
    }

    pub fn show_quiz(&mut self, questions: Vec<QuizQuestion>) {
        let answers = vec![None; questions.len()];
        self.screen = Screen::Quiz {
            questions,
            index: 0,
            selected: 0,
            answers,
        };
    }

    pub fn show_cheatsheet(&mut self, sheet: Cheatsheet) {
        self.screen = Screen::Cheatsheet { sheet, scroll: 0 };
    }

    pub fn show_error(&mut self, message: String) {
        self.screen = Screen::Error { message };
    }

    pub fn return_home(&mut self) {
        self.screen = Screen::Selection { cursor: 0 };
    }

    // ── Flashcards ────────────────────────────────────────────────────────

    pub fn flip_card(&mut self) {
        if let Screen::Flashcards { flipped, .. } = &mut self.screen {
            *flipped = !*flipped;
        }
    }

    pub fn next_card(&mut self) {
        if let Screen::Flashcards {
            cards,
            index,
            flipped,
        } = &mut self.screen
            && *index + 1 < cards.len()
        {
            *index += 1;
            *flipped = false;
        }
    }

    pub fn previous_card(&mut self) {
        if let Screen::Flashcards { index, flipped, .. } = &mut self.screen
            && *index > 0
        {
            *index -= 1;
            *flipped = false;
        }
    }

    // ── Quiz ──────────────────────────────────────────────────────────────

    pub fn select_next_option(&mut self) {
        if let Screen::Quiz { selected, .. } = &mut self.screen {
            *selected = (*selected + 1) % NUM_OPTIONS;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Screen::Quiz { selected, .. } = &mut self.screen {
            *selected = (*selected + NUM_OPTIONS - 1) % NUM_OPTIONS;
        }
    }

    /// Record the highlighted option for the current question and advance;
    /// finishing the last question moves to the result screen.
    pub fn submit_answer(&mut self) {
        if let Screen::Quiz {
            questions,
            index,
            selected,
            answers,
        } = &mut self.screen
        {
            answers[*index] = Some(*selected);

            if *index + 1 >= questions.len() {
                let score = answers
                    .iter()
                    .zip(questions.iter())
                    .filter(|(answer, question)| **answer == Some(question.correct_option))
                    .count();
                let questions = std::mem::take(questions);
                self.screen = Screen::Result { questions, score };
            } else {
                *index += 1;
                // Restore a previously recorded answer when stepping
                // forward over an already-answered question.
                *selected = answers[*index].unwrap_or(0);
            }
        }
    }

    /// Step back to the previous question, restoring its recorded answer.
    pub fn previous_question(&mut self) {
        if let Screen::Quiz {
            index,
            selected,
            answers,
            ..
        } = &mut self.screen
            && *index > 0
        {
            *index -= 1;
            *selected = answers[*index].unwrap_or(0);
        }
    }

    /// Retake the same quiz from the result screen.
    pub fn retake_quiz(&mut self) {
        if let Screen::Result { questions, .. } = &mut self.screen {
            let questions = std::mem::take(questions);
            self.show_quiz(questions);
        }
    }

    // ── Cheatsheet ────────────────────────────────────────────────────────

    pub fn scroll_down(&mut self) {
        if let Screen::Cheatsheet { sheet, scroll } = &mut self.screen {
            // Also capped at u16::MAX, the widest offset the renderer takes.
            let max = sheet
                .line_count()
                .saturating_sub(1)
                .min(u16::MAX as usize);
            *scroll = (*scroll + 1).min(max);
        }
    }

    pub fn scroll_up(&mut self) {
        if let Screen::Cheatsheet { scroll, .. } = &mut self.screen {
            *scroll = scroll.saturating_sub(1);
        }
    }
}

/// Encouragement shown on the result screen, banded by score.
pub fn motivational_message(score: usize, total: usize) -> &'static str {
    let percentage = if total > 0 {
        score as f64 / total as f64
    } else {
        0.0
    };

    if percentage >= 0.9 {
        "Excellent! You've mastered this material and are ready to apply your knowledge!"
    } else if percentage >= 0.7 {
        "Great job! You have a solid understanding of the key concepts!"
    } else if percentage >= 0.5 {
        "Good effort! With a bit more study, you'll improve your understanding!"
    } else if percentage >= 0.3 {
        "You're making progress! Review the material again to strengthen your knowledge!"
    } else {
        "Keep practicing! Everyone starts somewhere, and with dedication you'll improve!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_app(n: usize) -> App {
        let mut app = App::new(Path::new("notes.txt"), String::new());
        let questions = (0..n)
            .map(|i| {
                QuizQuestion::new(
                    format!("Q{i}?"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    i % NUM_OPTIONS,
                )
            })
            .collect();
        app.show_quiz(questions);
        app
    }

    #[test]
    fn test_selection_cursor_wraps() {
        let mut app = App::new(Path::new("notes.txt"), String::new());
        assert_eq!(app.selected_mode(), Some(StudyMode::Flashcards));
        app.select_previous_mode();
        assert_eq!(app.selected_mode(), Some(StudyMode::Cheatsheet));
        app.select_next_mode();
        assert_eq!(app.selected_mode(), Some(StudyMode::Flashcards));
    }

    #[test]
    fn test_stale_generation_rejected() {
        let mut app = App::new(Path::new("notes.txt"), String::new());
        let first = app.begin_loading(StudyMode::Quiz);
        app.cancel_loading();
        assert!(!app.accepts_generation(first));
        assert!(matches!(app.screen, Screen::Selection { .. }));

        let second = app.begin_loading(StudyMode::Quiz);
        assert!(app.accepts_generation(second));
    }

    #[test]
    fn test_failed_generation_lands_on_error_screen() {
        let mut app = App::new(Path::new("notes.txt"), String::new());
        let generation = app.begin_loading(StudyMode::Quiz);
        assert!(app.accepts_generation(generation));

        app.show_error("unsupported document format: md".to_string());
        match &app.screen {
            Screen::Error { message } => assert!(message.contains("unsupported")),
            other => panic!("expected error screen, got {other:?}"),
        }

        app.return_home();
        assert!(matches!(app.screen, Screen::Selection { .. }));
    }

    #[test]
    fn test_quiz_scoring_and_result() {
        let mut app = quiz_app(3);
        // Correct answers are 0, 1, 2; answer 0, 1, 0.
        app.submit_answer();
        app.select_next_option();
        app.submit_answer();
        app.submit_answer();

        match &app.screen {
            Screen::Result { questions, score } => {
                assert_eq!(questions.len(), 3);
                assert_eq!(*score, 2);
            }
            other => panic!("expected result screen, got {other:?}"),
        }
    }

    #[test]
    fn test_back_restores_recorded_answer() {
        let mut app = quiz_app(3);
        app.select_next_option();
        app.select_next_option(); // option 2
        app.submit_answer();
        assert!(matches!(&app.screen, Screen::Quiz { index: 1, .. }));

        app.previous_question();
        match &app.screen {
            Screen::Quiz {
                index, selected, ..
            } => {
                assert_eq!(*index, 0);
                assert_eq!(*selected, 2);
            }
            other => panic!("expected quiz screen, got {other:?}"),
        }
    }

    #[test]
    fn test_retake_resets_answers() {
        let mut app = quiz_app(1);
        app.submit_answer();
        assert!(matches!(app.screen, Screen::Result { .. }));

        app.retake_quiz();
        match &app.screen {
            Screen::Quiz {
                questions,
                index,
                answers,
                ..
            } => {
                assert_eq!(questions.len(), 1);
                assert_eq!(*index, 0);
                assert!(answers.iter().all(Option::is_none));
            }
            other => panic!("expected quiz screen, got {other:?}"),
        }
    }

    #[test]
    fn test_flashcard_navigation_clamps() {
        let mut app = App::new(Path::new("notes.txt"), String::new());
        app.show_flashcards(vec![
            Flashcard::new("f1", "b1"),
            Flashcard::new("f2", "b2"),
        ]);

        app.previous_card(); // already at the first card
        app.flip_card();
        assert!(matches!(
            app.screen,
            Screen::Flashcards {
                index: 0,
                flipped: true,
                ..
            }
        ));

        app.next_card(); // flip state resets on navigation
        app.next_card(); // already at the last card
        assert!(matches!(
            app.screen,
            Screen::Flashcards {
                index: 1,
                flipped: false,
                ..
            }
        ));
    }

    #[test]
    fn test_cheatsheet_scroll_bounds() {
        let mut app = App::new(Path::new("notes.txt"), String::new());
        app.show_cheatsheet(Cheatsheet::new("one\ntwo\nthree"));
        app.scroll_up();
        app.scroll_down();
        app.scroll_down();
        app.scroll_down(); // clamped at last line
        match app.screen {
            Screen::Cheatsheet { scroll, .. } => assert_eq!(scroll, 2),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_cheatsheet_scroll_capped_at_renderer_limit() {
        let mut app = App::new(Path::new("notes.txt"), String::new());
        app.screen = Screen::Cheatsheet {
            sheet: Cheatsheet::new("x\n".repeat(70_000)),
            scroll: u16::MAX as usize,
        };
        app.scroll_down();
        match app.screen {
            Screen::Cheatsheet { scroll, .. } => assert_eq!(scroll, u16::MAX as usize),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_motivational_message_bands() {
        assert!(motivational_message(9, 10).starts_with("Excellent!"));
        assert!(motivational_message(7, 10).starts_with("Great job!"));
        assert!(motivational_message(5, 10).starts_with("Good effort!"));
        assert!(motivational_message(3, 10).starts_with("You're making progress!"));
        assert!(motivational_message(0, 10).starts_with("Keep practicing!"));
        assert!(motivational_message(0, 0).starts_with("Keep practicing!"));
    }
}
