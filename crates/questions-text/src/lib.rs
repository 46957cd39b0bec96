//! Tokenization and sentence splitting for the question answerer

mod sentences;
mod stopwords;
mod tokenizer;

pub use sentences::{sentence_corpus, split_sentences};
pub use tokenizer::{Tokenizer, WordTokenizer};
