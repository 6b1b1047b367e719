//! Batch-local TF-IDF weighting.
//!
//! The vocabulary and document frequencies come only from the documents
//! passed to `fit_transform`; nothing is retained between calls.
//!
//! Rows are kept sorted by vocabulary index and every sum walks them in that
//! order, so identical texts produce bit-identical vectors and scores.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::tokenizer::tokenize;

/// Sparse, L2-normalised term vector: `(vocabulary index, weight)` pairs in
/// ascending index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
}

impl TermVector {
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product as a merge of the two sorted entry lists.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }
}

/// Result of fitting a batch: the vocabulary and one vector per input text.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    pub vocabulary: HashMap<String, usize>,
    pub rows: Vec<TermVector>,
}

/// Smoothed inverse document frequency, `ln((1 + n) / (1 + df)) + 1`.
/// Never below 1, so terms in every document still carry weight.
pub fn smoothed_idf(n_documents: usize, doc_freq: usize) -> f64 {
    ((1.0 + n_documents as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Builds TF-IDF vectors for `documents`.
///
/// tf is the raw term count, idf is `smoothed_idf`, and each row is scaled
/// to unit length. A text with no terms becomes the zero vector.
pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> TfidfMatrix {
    let mut vocabulary: HashMap<String, usize> = HashMap::new();
    let mut doc_freq: Vec<usize> = Vec::new();
    let mut counts: Vec<BTreeMap<usize, usize>> = Vec::with_capacity(documents.len());

    for doc in documents {
        let mut tf: BTreeMap<usize, usize> = BTreeMap::new();
        for token in tokenize(doc.as_ref()) {
            let next = vocabulary.len();
            let idx = *vocabulary.entry(token).or_insert(next);
            if idx == doc_freq.len() {
                doc_freq.push(0);
            }
            *tf.entry(idx).or_insert(0) += 1;
        }
        for idx in tf.keys() {
            doc_freq[*idx] += 1;
        }
        counts.push(tf);
    }

    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| smoothed_idf(documents.len(), df))
        .collect();

    let rows = counts
        .into_iter()
        .map(|tf| {
            let mut entries: Vec<(usize, f64)> = tf
                .into_iter()
                .map(|(idx, count)| (idx, count as f64 * idf[idx]))
                .collect();
            let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in entries.iter_mut() {
                    *w /= norm;
                }
            }
            TermVector { entries }
        })
        .collect();

    TfidfMatrix { vocabulary, rows }
}

/// Cosine similarity. Defined as 0 when either side is the zero vector.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    a.dot(b) / denom
}
