use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do with an upload that contributes no text: unusable filename,
/// unsupported suffix, failed extraction, or an empty result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipPolicy {
    /// Abort the request on the first such file.
    FailFast,
    /// Drop the file without telling anyone.
    #[default]
    SkipSilently,
    /// Drop the file and report a warning next to the ranking.
    CollectWarnings,
}

impl FromStr for SkipPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fail_fast" => Ok(SkipPolicy::FailFast),
            "skip_silently" => Ok(SkipPolicy::SkipSilently),
            "collect_warnings" => Ok(SkipPolicy::CollectWarnings),
            other => Err(format!(
                "unknown skip policy '{other}' (expected fail_fast, skip_silently or collect_warnings)"
            )),
        }
    }
}

impl fmt::Display for SkipPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipPolicy::FailFast => "fail_fast",
            SkipPolicy::SkipSilently => "skip_silently",
            SkipPolicy::CollectWarnings => "collect_warnings",
        };
        f.write_str(s)
    }
}

/// Why a file was left out of the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The client filename has no usable final path component.
    InvalidFilename,
    UnsupportedFormat,
    ExtractionFailed(String),
    EmptyText,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidFilename => f.write_str("filename cannot be stored"),
            SkipReason::UnsupportedFormat => {
                f.write_str("unsupported file type (expected .pdf, .docx or .txt)")
            }
            SkipReason::ExtractionFailed(e) => write!(f, "could not read file: {e}"),
            SkipReason::EmptyText => f.write_str("no text could be extracted"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipWarning {
    pub filename: String,
    pub reason: SkipReason,
}
