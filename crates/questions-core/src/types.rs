//! Pipeline output types

use questions_rank::{FileScore, SentenceScore};
use serde::Serialize;

/// Result of answering one question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Normalized query words, sorted
    pub query: Vec<String>,
    /// Best files, best first
    pub files: Vec<FileScore>,
    /// Best sentences from those files, best first
    pub sentences: Vec<SentenceScore>,
}

impl Answer {
    pub fn empty() -> Self {
        Self {
            query: Vec::new(),
            files: Vec::new(),
            sentences: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermWeight {
    pub term: String,
    pub idf: f64,
}

/// Summary of the file-level index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub files: usize,
    pub vocabulary: usize,
    /// Highest idf first
    pub rarest: Vec<TermWeight>,
    /// Lowest idf first
    pub commonest: Vec<TermWeight>,
}
