mod cheatsheet;
mod flashcard;
mod question;

pub use cheatsheet::Cheatsheet;
pub use flashcard::Flashcard;
pub use question::{NUM_OPTIONS, QuizQuestion};

/// The three kinds of study content Zapio can generate from a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMode {
    Flashcards,
    Quiz,
    Cheatsheet,
}

impl StudyMode {
    /// All modes, in the order they appear on the selection screen.
    pub const ALL: [StudyMode; 3] = [
        StudyMode::Flashcards,
        StudyMode::Quiz,
        StudyMode::Cheatsheet,
    ];

    /// Human-readable name for screen titles.
    pub fn label(&self) -> &'static str {
        match self {
            StudyMode::Flashcards => "Flashcards",
            StudyMode::Quiz => "Quiz",
            StudyMode::Cheatsheet => "Cheatsheet",
        }
    }

    /// Value of the `X-Title` attribution header sent with this mode's
    /// API requests.
    pub fn request_title(&self) -> &'static str {
        match self {
            StudyMode::Flashcards => "Zapio Flashcard Generator",
            StudyMode::Quiz => "Zapio Quiz Generator",
            StudyMode::Cheatsheet => "Zapio Cheatsheet Generator",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_titles_name_the_generator() {
        assert_eq!(StudyMode::Quiz.request_title(), "Zapio Quiz Generator");
        assert_eq!(
            StudyMode::Flashcards.request_title(),
            "Zapio Flashcard Generator"
        );
        assert_eq!(
            StudyMode::Cheatsheet.request_title(),
            "Zapio Cheatsheet Generator"
        );
    }
}
