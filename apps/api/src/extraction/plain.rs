use std::path::Path;

use super::ExtractError;

/// Reads the file as UTF-8. Invalid UTF-8 is an error rather than lossy text.
pub fn extract_plain(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
