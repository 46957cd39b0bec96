//! Inverse document frequency over a document set

use crate::{Corpus, RankError};
use std::collections::{HashMap, HashSet};

/// Token -> `ln(N / df)` over the documents it was computed from.
///
/// Only tokens seen in at least one document have an entry, so a lookup
/// for anything else returns `None` rather than a default weight.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    document_count: usize,
}

impl IdfTable {
    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of documents the table was computed over
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// All entries ordered by token
    pub fn terms(&self) -> Vec<(&str, f64)> {
        let mut terms: Vec<_> = self
            .weights
            .iter()
            .map(|(token, &idf)| (token.as_str(), idf))
            .collect();
        terms.sort_by(|a, b| a.0.cmp(b.0));
        terms
    }
}

/// Compute IDF for every distinct token in `documents`.
///
/// Document frequency counts presence, not occurrences.
pub fn compute_idf(documents: &Corpus) -> Result<IdfTable, RankError> {
    if documents.is_empty() {
        return Err(RankError::EmptyDocuments);
    }

    let doc_count = documents.len();
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for tokens in documents.values() {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in unique {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }

    let weights = doc_freq
        .into_iter()
        .map(|(term, df)| (term.to_string(), (doc_count as f64 / df as f64).ln()))
        .collect();

    tracing::debug!(documents = doc_count, "computed idf table");

    Ok(IdfTable {
        weights,
        document_count: doc_count,
    })
}
