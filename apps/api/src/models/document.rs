use serde::{Deserialize, Serialize};

/// File format inferred from the filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
    Unknown,
}

impl DocumentFormat {
    /// Classifies by suffix. Matching is case-sensitive, so `CV.PDF` is unknown.
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if filename.ends_with(".docx") {
            DocumentFormat::Docx
        } else if filename.ends_with(".txt") {
            DocumentFormat::Txt
        } else {
            DocumentFormat::Unknown
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, DocumentFormat::Unknown)
    }
}

/// One uploaded résumé after extraction. Lives for a single request.
#[derive(Debug, Clone)]
pub struct Document {
    /// Client-supplied filename. Not unique across a batch.
    pub filename: String,
    pub format: DocumentFormat,
    pub text: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            format: DocumentFormat::from_filename(&filename),
            filename,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_suffix() {
        assert_eq!(DocumentFormat::from_filename("cv.pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("cv.docx"), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_filename("cv.txt"), DocumentFormat::Txt);
        assert_eq!(DocumentFormat::from_filename("cv.doc"), DocumentFormat::Unknown);
        assert_eq!(DocumentFormat::from_filename("pdf"), DocumentFormat::Unknown);
    }

    #[test]
    fn test_format_is_case_sensitive() {
        assert_eq!(DocumentFormat::from_filename("CV.PDF"), DocumentFormat::Unknown);
    }

    #[test]
    fn test_document_new_infers_format() {
        let doc = Document::new("alice.docx", "Rust engineer");
        assert_eq!(doc.format, DocumentFormat::Docx);
        assert_eq!(doc.filename, "alice.docx");
        assert_eq!(Document::new("CV.TXT", "").format, DocumentFormat::Unknown);
    }
}
