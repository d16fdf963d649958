/// A generated plain-text cheatsheet summarizing a document.
#[derive(Debug, Clone)]
pub struct Cheatsheet {
    pub text: String,
}

impl Cheatsheet {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Number of display lines, used to bound scrolling.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}
