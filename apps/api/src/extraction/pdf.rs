use std::panic;
use std::path::Path;

use super::ExtractError;

/// Extracts text from every page and joins the pages in order, one newline
/// between them.
///
/// Pages without a text layer (scanned images) contribute nothing. The
/// backend can panic on malformed documents, so the call is isolated and a
/// panic becomes `ExtractError::Panicked`.
pub fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    extract_pdf_from_mem(&bytes)
}

pub fn extract_pdf_from_mem(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(ExtractError::Pdf(e.to_string())),
        Err(_) => return Err(ExtractError::Panicked),
    };

    let pages: Vec<&str> = pages
        .iter()
        .map(String::as_str)
        .filter(|page| !page.trim().is_empty())
        .collect();
    Ok(pages.join("\n"))
}
