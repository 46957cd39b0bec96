//! File-level TF-IDF ranking

use crate::error::check_count;
use crate::{Corpus, IdfTable, Query, RankError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileScore {
    pub id: String,
    pub score: f64,
}

/// Score every file against `query` and sort by score descending.
///
/// A file's score is the sum over query words of `tf * idf`. Query words the
/// table has never seen contribute nothing. Equal scores fall back to
/// ascending file id so the result does not depend on map order.
pub fn score_files(query: &Query, files: &Corpus, idf: &IdfTable) -> Vec<FileScore> {
    let mut scores: Vec<FileScore> = files
        .iter()
        .map(|(id, tokens)| FileScore {
            id: id.clone(),
            score: tf_idf(query, tokens, idf),
        })
        .collect();

    scores.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
    scores
}

/// Ids of the `n` best files for `query`
pub fn top_files(
    query: &Query,
    files: &Corpus,
    idf: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankError> {
    check_count(n)?;
    let mut scores = score_files(query, files, idf);
    scores.truncate(n);
    Ok(scores.into_iter().map(|s| s.id).collect())
}

fn tf_idf(query: &Query, tokens: &[String], idf: &IdfTable) -> f64 {
    query
        .iter()
        .map(|word| match idf.get(word) {
            Some(weight) => {
                let tf = tokens.iter().filter(|t| *t == word).count();
                tf as f64 * weight
            }
            None => 0.0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_idf;

    fn corpus(docs: &[(&str, &[&str])]) -> Corpus {
        docs.iter()
            .map(|(id, tokens)| {
                (
                    id.to_string(),
                    tokens.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    fn query(words: &[&str]) -> Query {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// A and B score equally from three distinct idf weights
    /// (document frequencies 1, 2 and 3 out of 12).
    fn equal_score_corpus() -> Corpus {
        let mut docs = corpus(&[
            ("A", &["a1", "a2", "a3"]),
            ("B", &["b1", "b2", "b3"]),
            ("F1", &["a2", "a3"]),
            ("F2", &["b2", "b3"]),
            ("F3", &["a3"]),
            ("F4", &["b3"]),
        ]);
        for i in 5..=10 {
            docs.insert(format!("F{}", i), vec!["z".to_string()]);
        }
        docs
    }

    #[test]
    fn test_top_files_picks_matching_file() {
        let files = corpus(&[("A", &["cat", "sat"]), ("B", &["dog", "ran"])]);
        let idf = compute_idf(&files).unwrap();
        let top = top_files(&query(&["cat"]), &files, &idf, 1).unwrap();
        assert_eq!(top, vec!["A"]);
    }

    #[test]
    fn test_term_frequency_weights_score() {
        let files = corpus(&[
            ("once", &["rust", "code"]),
            ("thrice", &["rust", "rust", "rust"]),
            ("none", &["python"]),
        ]);
        let idf = compute_idf(&files).unwrap();
        let scores = score_files(&query(&["rust"]), &files, &idf);

        assert_eq!(scores[0].id, "thrice");
        assert_eq!(scores[1].id, "once");
        let w = idf.get("rust").unwrap();
        assert!((scores[0].score - 3.0 * w).abs() < 1e-12);
        assert_eq!(scores[2].score, 0.0);
    }

    #[test]
    fn test_unknown_query_word_contributes_zero() {
        let files = corpus(&[("A", &["cat"]), ("B", &["dog"])]);
        let idf = compute_idf(&files).unwrap();
        let scores = score_files(&query(&["cat", "unicorn"]), &files, &idf);
        assert_eq!(scores[0].id, "A");
        assert!((scores[0].score - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_ties_break_by_file_id() {
        let files = corpus(&[("c.txt", &["x"]), ("a.txt", &["y"]), ("b.txt", &["z"])]);
        let idf = compute_idf(&files).unwrap();
        let top = top_files(&query(&["nothing"]), &files, &idf, 3).unwrap();
        assert_eq!(top, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_result_length_is_min_of_n_and_files() {
        let files = corpus(&[("A", &["cat"]), ("B", &["dog"])]);
        let idf = compute_idf(&files).unwrap();
        let top = top_files(&query(&["cat"]), &files, &idf, 10).unwrap();
        assert_eq!(top.len(), 2);
        assert_ne!(top[0], top[1]);
    }

    #[test]
    fn test_zero_count_rejected() {
        let files = corpus(&[("A", &["cat"])]);
        let idf = compute_idf(&files).unwrap();
        assert_eq!(
            top_files(&query(&["cat"]), &files, &idf, 0),
            Err(RankError::NonPositiveCount(0))
        );
    }

    #[test]
    fn test_empty_files_yield_empty_ranking() {
        let idf = compute_idf(&corpus(&[("A", &["cat"])])).unwrap();
        let top = top_files(&query(&["cat"]), &Corpus::new(), &idf, 1).unwrap();
        assert!(top.is_empty());
    }

    #[test]
    fn test_equal_scores_rank_stably_across_queries() {
        let files = equal_score_corpus();
        let idf = compute_idf(&files).unwrap();

        for _ in 0..50 {
            let q = query(&["b3", "a1", "b1", "a3", "a2", "b2"]);
            let scores = score_files(&q, &files, &idf);
            assert_eq!(scores[0].score, scores[1].score);
            assert_eq!(top_files(&q, &files, &idf, 2).unwrap(), vec!["A", "B"]);
        }
    }
}
