//! Sentence splitting

use crate::Tokenizer;
use questions_rank::Corpus;
use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_END_RE: OnceLock<Regex> = OnceLock::new();

/// Split text into sentences.
///
/// Every line is a separate passage. Within a passage a sentence ends at a
/// run of `.`, `!` or `?` (plus any closing quotes or brackets) followed by
/// whitespace, or at the end of the passage.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.lines().flat_map(split_passage).collect()
}

fn split_passage(passage: &str) -> Vec<String> {
    let re = SENTENCE_END_RE
        .get_or_init(|| Regex::new(r#"[.!?]+["'\x{201D}\x{2019})\]]*\s+"#).unwrap());

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in re.find_iter(passage) {
        push_trimmed(&mut sentences, &passage[start..m.end()]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &passage[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}

/// Build a sentence corpus (sentence text -> tokens) from raw documents.
///
/// Sentences that tokenize to nothing are dropped.
pub fn sentence_corpus<'a, T>(texts: impl IntoIterator<Item = &'a str>, tokenizer: &T) -> Corpus
where
    T: Tokenizer + ?Sized,
{
    let mut corpus = Corpus::new();
    for text in texts {
        for sentence in split_sentences(text) {
            let tokens = tokenizer.tokenize(&sentence);
            if !tokens.is_empty() {
                corpus.insert(sentence, tokens);
            }
        }
    }
    corpus
}
