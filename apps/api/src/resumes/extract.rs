//! Text extraction from uploaded resume files.
//!
//! PDFs go through pdf-extract; DOCX files are unzipped and the text runs of
//! `word/document.xml` are concatenated. Extracted text is
//! whitespace-normalized before it reaches the analysis pipeline, so
//! downstream code never sees tabs, carriage returns, or run-on spaces.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

/// Extracts raw text from a spooled upload based on its MIME type.
pub fn extract_text(path: &Path, content_type: &str) -> Result<String> {
    let normalized = content_type.to_lowercase();

    if normalized.contains("pdf") {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| anyhow::anyhow!("Failed to extract text from PDF: {e}"))?;
        debug!("Extracted {} chars from PDF", text.len());
        Ok(text)
    } else if normalized.contains("wordprocessingml") || normalized.contains("docx") {
        let text = extract_docx_text(path)
            .map_err(|e| anyhow::anyhow!("Failed to extract text from DOCX: {e}"))?;
        debug!("Extracted {} chars from DOCX", text.len());
        Ok(text)
    } else {
        bail!("Unsupported file type. Only PDF and DOCX are supported.")
    }
}

/// Reads `word/document.xml` out of the archive and concatenates its `w:t`
/// runs. Paragraph ends become blank lines, tabs and breaks become
/// whitespace; table cells are ordinary paragraphs and need no special case.
fn extract_docx_text(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .context("archive has no word/document.xml")?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Event::End(e) if e.local_name().as_ref() == b"t" => in_text_run = false,
            Event::End(e) if e.local_name().as_ref() == b"p" => text.push_str("\n\n"),
            Event::Empty(e) if e.local_name().as_ref() == b"tab" => text.push('\t'),
            Event::Empty(e) if e.local_name().as_ref() == b"br" => text.push('\n'),
            Event::Text(t) if in_text_run => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

/// Collapses all whitespace runs (including newlines) to single spaces and
/// trims the ends. PDF extraction produces ragged spacing otherwise.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOCX_MIME: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Backend developer with </w:t></w:r><w:r><w:t>Rust experience</w:t></w:r></w:p>
    <w:p><w:r><w:t>Led the R&amp;D team</w:t></w:r></w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Skills: python, docker</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
  </w:body>
</w:document>"#;

    fn write_zip(member: &str, content: &str) -> tempfile::NamedTempFile {
        let mut buf = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file(member, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), buf.into_inner()).unwrap();
        file
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let raw = "John  Doe\n\n\nSoftware   Engineer\t\tPython";
        assert_eq!(clean_text(raw), "John Doe Software Engineer Python");
    }

    #[test]
    fn test_clean_text_trims_ends() {
        assert_eq!(clean_text("  padded  "), "padded");
    }

    #[test]
    fn test_clean_text_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
    }

    #[test]
    fn test_extract_text_reads_docx_paragraphs() {
        let file = write_zip("word/document.xml", DOCUMENT_XML);
        let text = extract_text(file.path(), DOCX_MIME).unwrap();
        // adjacent runs concatenate without separators
        assert!(text.contains("Backend developer with Rust experience"));
        // each paragraph ends with a blank line
        assert!(text.contains("Jane Doe\n\n"));
        // entities come out decoded
        assert!(text.contains("Led the R&D team"));
        // table cell text is part of the body
        assert!(text.contains("Skills: python, docker"));
    }

    #[test]
    fn test_extract_text_docx_missing_document_xml() {
        let file = write_zip("word/other.xml", "<x/>");
        let err = extract_text(file.path(), DOCX_MIME).unwrap_err();
        assert!(err.to_string().contains("Failed to extract text from DOCX"));
    }

    #[test]
    fn test_extract_text_rejects_unsupported_type() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = extract_text(file.path(), "text/plain").unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
    }
}
