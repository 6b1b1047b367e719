//! Text Extractor — best-effort plain text from PDF, DOCX and plain-text uploads.
//!
//! Every backend returns trimmed text. Unknown formats yield an empty string;
//! whether an empty or failed extraction is fatal is decided by the caller's
//! `SkipPolicy`, not here.

pub mod docx;
pub mod pdf;
pub mod plain;

use std::path::Path;

use thiserror::Error;

use crate::models::DocumentFormat;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("extractor panicked on malformed input")]
    Panicked,
}

/// Extracts the text of `path`, dispatching on `format`.
pub fn extract(path: &Path, format: DocumentFormat) -> Result<String, ExtractError> {
    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf(path)?,
        DocumentFormat::Docx => docx::extract_docx(path)?,
        DocumentFormat::Txt => plain::extract_plain(path)?,
        DocumentFormat::Unknown => String::new(),
    };
    Ok(text.trim().to_string())
}
