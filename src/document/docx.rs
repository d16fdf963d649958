//! DOCX text extraction.
//!
//! A `.docx` file is a zip archive; the body lives in `word/document.xml`.
//! Text is carried by `w:t` elements, paragraphs end at `</w:p>`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use super::DocumentError;

pub fn extract_text(path: &Path) -> Result<String, DocumentError> {
    let file = File::open(path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| DocumentError::Docx(format!("not a zip archive: {e}")))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| DocumentError::Docx(format!("missing word/document.xml: {e}")))?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;

    document_xml_text(&xml)
}

/// Pull the visible text out of a WordprocessingML document body.
fn document_xml_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_text_run = true;
                }
            }
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| DocumentError::Docx(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" => out.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocumentError::Docx(e.to_string())),
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;

    use super::*;

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Split </w:t></w:r><w:r><w:t>run &amp; entity.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Tab</w:t><w:tab/><w:t>after.</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_document_xml_text() {
        let text = document_xml_text(DOCUMENT_XML).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "First paragraph.");
        assert_eq!(lines[1], "Split run & entity.");
        assert_eq!(lines[2], "Tab\tafter.");
    }

    #[test]
    fn test_ignores_text_outside_runs() {
        let xml = "<w:p><w:style>hidden</w:style><w:r><w:t>shown</w:t></w:r></w:p>";
        assert_eq!(document_xml_text(xml).unwrap(), "shown\n");
    }

    #[test]
    fn test_extract_from_zip_archive() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        {
            let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
            writer
                .start_file("word/document.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(DOCUMENT_XML.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        let text = extract_text(file.path()).unwrap();
        assert!(text.starts_with("First paragraph."));
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"definitely not a zip").unwrap();
        assert!(matches!(
            extract_text(file.path()),
            Err(DocumentError::Docx(_))
        ));
    }
}
