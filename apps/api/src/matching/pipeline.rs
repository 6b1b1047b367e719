//! The match request flow: persist, extract, filter, rank.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::extraction::extract;
use crate::matching::policy::{SkipPolicy, SkipReason, SkipWarning};
use crate::matching::upload::{persist, scratch_path, UploadedFile};
use crate::models::{Document, DocumentFormat, ScoredResult};
use crate::ranking::{rank, RankError};

pub const MISSING_INPUT_MESSAGE: &str = "Please upload resumes and enter a job description.";
pub const NO_TEXT_MESSAGE: &str = "No valid text extracted from uploaded files.";
pub const RESULTS_MESSAGE: &str = "Top matching resumes:";

/// Outcome of a successful match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub results: Vec<ScoredResult>,
    /// Only populated under `SkipPolicy::CollectWarnings`.
    pub warnings: Vec<SkipWarning>,
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,

    #[error("{}", NO_TEXT_MESSAGE)]
    NoUsableText,

    #[error("Could not use '{filename}': {reason}")]
    Rejected {
        filename: String,
        reason: SkipReason,
    },

    #[error("Ranking failed: {0}")]
    Rank(#[from] RankError),

    #[error("Could not store upload '{filename}': {source}")]
    Storage {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

impl MatchError {
    /// True when the error is something to show the user on the page rather
    /// than a server fault.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, MatchError::Storage { .. })
    }
}

/// Runs one match request to completion.
///
/// Parts with an empty filename are ignored. Every remaining file with a
/// storable name is written to `upload_dir` before extraction. Files that
/// yield no text, including unstorable names, are handled according to
/// `policy`.
pub fn run_match(
    job_description: &str,
    uploads: &[UploadedFile],
    upload_dir: &Path,
    policy: SkipPolicy,
) -> Result<MatchReport, MatchError> {
    let uploads: Vec<&UploadedFile> = uploads.iter().filter(|u| !u.filename.is_empty()).collect();
    if uploads.is_empty() || job_description.trim().is_empty() {
        return Err(MatchError::MissingInput);
    }

    let mut corpus: Vec<Document> = Vec::with_capacity(uploads.len());
    let mut warnings = Vec::new();

    for upload in uploads {
        match read_upload(upload, upload_dir)? {
            Ok(text) => corpus.push(Document::new(upload.filename.as_str(), text)),
            Err(reason) => {
                warn!("Skipping '{}': {reason}", upload.filename);
                match policy {
                    SkipPolicy::FailFast => {
                        return Err(MatchError::Rejected {
                            filename: upload.filename.clone(),
                            reason,
                        })
                    }
                    SkipPolicy::SkipSilently => {}
                    SkipPolicy::CollectWarnings => warnings.push(SkipWarning {
                        filename: upload.filename.clone(),
                        reason,
                    }),
                }
            }
        }
    }

    if corpus.is_empty() {
        return Err(MatchError::NoUsableText);
    }

    let texts: Vec<&str> = corpus.iter().map(|d| d.text.as_str()).collect();
    let names: Vec<&str> = corpus.iter().map(|d| d.filename.as_str()).collect();
    let results = rank(job_description, &texts, &names)?;

    debug!("Job description: {} chars", job_description.len());
    debug!("Resume files: {names:?}");
    debug!(
        "Similarity scores: {:?}",
        results.iter().map(|r| r.score).collect::<Vec<_>>()
    );

    Ok(MatchReport { results, warnings })
}

/// Stores one upload and extracts its text. The outer error is a disk
/// failure that aborts the request; the inner one is a per-file skip.
fn read_upload(
    upload: &UploadedFile,
    upload_dir: &Path,
) -> Result<Result<String, SkipReason>, MatchError> {
    let Some(path) = scratch_path(upload_dir, &upload.filename) else {
        return Ok(Err(SkipReason::InvalidFilename));
    };
    persist(&path, upload).map_err(|source| MatchError::Storage {
        filename: upload.filename.clone(),
        source,
    })?;

    let format = DocumentFormat::from_filename(&upload.filename);
    if !format.is_supported() {
        return Ok(Err(SkipReason::UnsupportedFormat));
    }
    Ok(match extract(&path, format) {
        Ok(text) if text.is_empty() => Err(SkipReason::EmptyText),
        Ok(text) => Ok(text),
        Err(e) => Err(SkipReason::ExtractionFailed(e.to_string())),
    })
}
