//! Similarity Ranker — scores résumé texts against a job description.
//!
//! Vectors live in a TF-IDF space fitted on `[query] + candidates` for this
//! call only. Scores are therefore relative to the batch: the same résumé
//! can score differently next to a different set of résumés, and scores from
//! separate requests must not be compared.

pub mod tfidf;
pub mod tokenizer;

use thiserror::Error;
use tracing::debug;

use crate::models::ScoredResult;
use tfidf::{cosine_similarity, fit_transform};

/// Number of résumés returned per request.
pub const TOP_K: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    #[error("query text is empty")]
    EmptyQuery,

    #[error("no candidate texts to rank")]
    NoCandidates,

    #[error("{candidates} candidate texts but {names} names")]
    LengthMismatch { candidates: usize, names: usize },
}

/// Ranks `candidates` against `query` and returns the best `TOP_K`.
///
/// `candidates` and `names` are parallel. Results are ordered by descending
/// score; exact ties keep candidate order. Scores are in [0, 1], rounded to
/// two decimals.
pub fn rank<Q, N>(
    query: &str,
    candidates: &[Q],
    names: &[N],
) -> Result<Vec<ScoredResult>, RankError>
where
    Q: AsRef<str>,
    N: AsRef<str>,
{
    rank_top_k(query, candidates, names, TOP_K)
}

pub fn rank_top_k<Q, N>(
    query: &str,
    candidates: &[Q],
    names: &[N],
    k: usize,
) -> Result<Vec<ScoredResult>, RankError>
where
    Q: AsRef<str>,
    N: AsRef<str>,
{
    if query.trim().is_empty() {
        return Err(RankError::EmptyQuery);
    }
    if candidates.is_empty() {
        return Err(RankError::NoCandidates);
    }
    if candidates.len() != names.len() {
        return Err(RankError::LengthMismatch {
            candidates: candidates.len(),
            names: names.len(),
        });
    }

    let similarities = similarity_scores(query, candidates);

    Ok(top_k_indices(&similarities, k)
        .into_iter()
        .map(|i| ScoredResult {
            filename: names[i].as_ref().to_string(),
            score: round_score(similarities[i]),
        })
        .collect())
}

/// Cosine similarity of the query against every candidate, in candidate order.
pub fn similarity_scores<Q: AsRef<str>>(query: &str, candidates: &[Q]) -> Vec<f64> {
    let mut batch: Vec<&str> = Vec::with_capacity(candidates.len() + 1);
    batch.push(query);
    batch.extend(candidates.iter().map(|c| c.as_ref()));

    let matrix = fit_transform(&batch);
    debug!(
        "Fitted TF-IDF over {} texts, vocabulary size {}",
        batch.len(),
        matrix.vocabulary.len()
    );

    let Some((query_vec, candidate_vecs)) = matrix.rows.split_first() else {
        return Vec::new();
    };
    candidate_vecs
        .iter()
        .map(|v| cosine_similarity(query_vec, v))
        .collect()
}

/// Indices of the `k` largest scores, descending. The sort is stable so
/// equal scores keep their original order.
pub fn top_k_indices(scores: &[f64], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    indices.truncate(k);
    indices
}

/// Clamps to [0, 1] and rounds to two decimals, halves away from zero.
pub fn round_score(score: f64) -> f64 {
    (score.clamp(0.0, 1.0) * 100.0).round() / 100.0
}
