/// Number of answer options per quiz question.
pub const NUM_OPTIONS: usize = 4;

/// A multiple-choice quiz question with exactly four options.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_option: usize,
}

impl QuizQuestion {
    /// Build a question from whatever the model returned.
    ///
    /// Options beyond the fourth are dropped, missing options are padded
    /// with "N/A", and an out-of-range correct index falls back to 0.
    pub fn new(question: impl Into<String>, options: Vec<String>, correct_option: usize) -> Self {
        let mut padded = options;
        padded.truncate(NUM_OPTIONS);
        while padded.len() < NUM_OPTIONS {
            padded.push("N/A".to_string());
        }
        let options: [String; NUM_OPTIONS] =
            padded.try_into().expect("padded to exactly NUM_OPTIONS");

        let correct_option = if correct_option < NUM_OPTIONS {
            correct_option
        } else {
            0
        };

        Self {
            question: question.into(),
            options,
            correct_option,
        }
    }
}
