//! TF-IDF ranking of documents and sentences against a query

mod error;
mod files;
mod idf;
mod sentences;

use std::collections::{BTreeSet, HashMap};

pub use error::RankError;
pub use files::{score_files, top_files, FileScore};
pub use idf::{compute_idf, IdfTable};
pub use sentences::{query_term_density, score_sentences, top_sentences, SentenceScore};

/// Document identifier -> normalized tokens, in tokenizer order
pub type Corpus = HashMap<String, Vec<String>>;

/// Normalized query tokens. Ordered so score sums are computed in the
/// same order on every call.
pub type Query = BTreeSet<String>;
