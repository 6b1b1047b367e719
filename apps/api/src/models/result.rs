use serde::{Deserialize, Serialize};

/// A ranked résumé: filename plus cosine similarity rounded to 2 decimals.
///
/// Scores are relative to the batch they were computed in. IDF statistics
/// come from that request's job description and résumés only, so a 0.42
/// in one request says nothing about a 0.42 in another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub filename: String,
    pub score: f64,
}
