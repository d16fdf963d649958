//! Document text extraction.
//!
//! Supports the three upload formats: PDF (via `pdf-extract`), DOCX (a zip
//! archive holding `word/document.xml`), and plain UTF-8 text. Extracted
//! text is truncated to [`MAX_DOCUMENT_CHARS`] before it is sent to the
//! model.

mod docx;

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Maximum number of characters of document text included in a prompt.
pub const MAX_DOCUMENT_CHARS: usize = 15_000;

/// Error extracting text from an uploaded document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read document: {0}")]
    Io(#[from] io::Error),
    #[error("failed to extract PDF text: {0}")]
    Pdf(String),
    #[error("failed to extract DOCX text: {0}")]
    Docx(String),
}

/// Extract the full text of a document, routed by file extension
/// (case-insensitive).
pub fn extract_text(path: &Path) -> Result<String, DocumentError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path).map_err(|e| DocumentError::Pdf(e.to_string()))?,
        "docx" => docx::extract_text(path)?,
        "txt" => fs::read_to_string(path)?,
        _ => {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unnamed>")
                .to_string();
            return Err(DocumentError::UnsupportedFormat(name));
        }
    };

    debug!(path = %path.display(), chars = text.chars().count(), "extracted document text");
    Ok(text)
}

/// Cap `text` at `max_chars` characters, on a char boundary.
pub fn truncate(mut text: String, max_chars: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
    text
}

/// First `max_chars` characters of `text` for the selection-screen preview,
/// with an ellipsis when the document continues past the cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut snippet: String = text.chars().take(max_chars).collect();
    snippet.push('…');
    snippet
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("hello".to_string(), 10), "hello");
        assert_eq!(truncate("hello".to_string(), 5), "hello");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // four chars, ten bytes
        let text = "aé漢🦀".to_string();
        assert_eq!(truncate(text.clone(), 3), "aé漢");
        assert_eq!(truncate(text, 4), "aé漢🦀");
    }

    #[test]
    fn test_preview_appends_ellipsis() {
        assert_eq!(preview("abcdef", 3), "abc…");
        assert_eq!(preview("abc", 3), "abc");
    }

    #[test]
    fn test_txt_extraction() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all("plain text body".as_bytes()).unwrap();
        let text = extract_text(file.path()).unwrap();
        assert_eq!(text, "plain text body");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let mut file = tempfile::Builder::new().suffix(".TXT").tempfile().unwrap();
        file.write_all(b"upper").unwrap();
        assert_eq!(extract_text(file.path()).unwrap(), "upper");
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let file = tempfile::Builder::new().suffix(".odt").tempfile().unwrap();
        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat(_)));
    }
}
