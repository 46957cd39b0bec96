//! Sentence-level ranking: matched IDF first, query-term density second

use crate::error::check_count;
use crate::{Corpus, IdfTable, Query, RankError};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub id: String,
    /// Sum of idf over distinct query words present in the sentence
    pub score: f64,
    /// Fraction of the sentence's tokens that are query words
    pub density: f64,
}

/// Fraction of `tokens` that belong to `query`, `None` for an empty sentence.
pub fn query_term_density(query: &Query, tokens: &[String]) -> Option<f64> {
    if tokens.is_empty() {
        return None;
    }
    let hits = tokens.iter().filter(|t| query.contains(*t)).count();
    Some(hits as f64 / tokens.len() as f64)
}

/// Score and sort every sentence against `query`.
///
/// Ordering is matched idf descending, then density descending, then
/// sentence text ascending. Sentences without tokens have no density and
/// are left out.
pub fn score_sentences(query: &Query, sentences: &Corpus, idf: &IdfTable) -> Vec<SentenceScore> {
    let mut scores: Vec<SentenceScore> = sentences
        .iter()
        .filter_map(|(id, tokens)| {
            let Some(density) = query_term_density(query, tokens) else {
                tracing::debug!(sentence = %id, "skipping sentence without tokens");
                return None;
            };
            Some(SentenceScore {
                id: id.clone(),
                score: matched_idf(query, tokens, idf),
                density,
            })
        })
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.density.total_cmp(&a.density))
            .then_with(|| a.id.cmp(&b.id))
    });
    scores
}

/// The `n` best sentences for `query`
pub fn top_sentences(
    query: &Query,
    sentences: &Corpus,
    idf: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankError> {
    check_count(n)?;
    let mut scores = score_sentences(query, sentences, idf);
    scores.truncate(n);
    Ok(scores.into_iter().map(|s| s.id).collect())
}

fn matched_idf(query: &Query, tokens: &[String], idf: &IdfTable) -> f64 {
    let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    query
        .iter()
        .filter(|word| present.contains(word.as_str()))
        .map(|word| idf.get(word).unwrap_or(0.0))
        .sum()
}
