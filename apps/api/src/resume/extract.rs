//! Document text extraction for uploaded resumes (PDF and Word documents).

use std::panic::{self, AssertUnwindSafe};

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0}. Only PDF and DOCX are supported.")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {format}: {cause}")]
    ExtractionFailed { format: &'static str, cause: String },
}

/// Extensions accepted at the upload boundary and by [`extract`].
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];

/// Returns the lower-cased suffix after the final `.`, if any.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

pub fn is_allowed_file(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Extracts plain text from a resume, dispatching on the filename extension.
///
/// Either the whole document is returned or an error is raised; no partial text.
pub fn extract(bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
    let ext = file_extension(filename).unwrap_or_default();
    match ext.as_str() {
        "pdf" => extract_pdf(bytes),
        "docx" | "doc" => extract_docx(bytes),
        _ => Err(ExtractionError::UnsupportedFormat(ext)),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let failed = |cause: String| ExtractionError::ExtractionFailed {
        format: "PDF",
        cause,
    };

    // pdf-extract panics on some malformed inputs
    let (page_count, pages) = panic::catch_unwind(AssertUnwindSafe(|| {
        let page_count = pdf_extract::Document::load_mem(bytes)
            .map_err(|e| e.to_string())?
            .get_pages()
            .len();
        let pages =
            pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| e.to_string())?;
        Ok::<_, String>((page_count, pages))
    }))
    .map_err(|_| failed("PDF decoder panicked on malformed input".to_string()))?
    .map_err(failed)?;

    join_pages(page_count, &pages).map_err(failed)
}

/// Joins decoded page texts. The page decoder stops silently at the first
/// page it cannot read, so fewer texts than pages is a failure.
fn join_pages(page_count: usize, pages: &[String]) -> Result<String, String> {
    if pages.len() < page_count {
        return Err(format!(
            "could not decode page {} of {}",
            pages.len() + 1,
            page_count
        ));
    }
    let text = pages.iter().map(|page| page.trim()).collect::<Vec<_>>().join("\n");
    Ok(text.trim().to_string())
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::ExtractionFailed {
        format: "DOCX",
        cause: e.to_string(),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(&para.children)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n").trim().to_string())
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}
