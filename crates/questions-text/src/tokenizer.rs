//! Word tokenizer

use crate::stopwords::is_stopword;
use regex::Regex;
use std::sync::OnceLock;

static WORD_RE: OnceLock<Regex> = OnceLock::new();
static CLITIC_RE: OnceLock<Regex> = OnceLock::new();

/// Turns raw text into normalized word tokens
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Lowercases, strips surrounding punctuation and clitics (`'s`, `n't`, ...),
/// then drops stopwords and any word still containing punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let word_re = WORD_RE.get_or_init(|| Regex::new(r"\S+").unwrap());
        let lowered = text.to_lowercase();
        word_re
            .find_iter(&lowered)
            .filter_map(|m| normalize(m.as_str()))
            .collect()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let clitic_re =
        CLITIC_RE.get_or_init(|| Regex::new(r"^(.+?)(?:n't|'s|'re|'ve|'ll|'d|'m|')$").unwrap());

    let mut word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
    if let Some(caps) = clitic_re.captures(word) {
        if let Some(stem) = caps.get(1) {
            word = stem.as_str();
        }
    }
    let word = word.trim_matches(|c: char| !c.is_alphanumeric());

    if word.is_empty() || word.chars().any(|c| c.is_ascii_punctuation()) || is_stopword(word) {
        return None;
    }
    Some(word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        WordTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_lowercases_and_drops_stopwords() {
        assert_eq!(tokens("What is a Neural Network?"), vec!["neural", "network"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        assert_eq!(tokens("cat dog cat"), vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_strips_surrounding_punctuation() {
        assert_eq!(
            tokens("\"Hello,\" said (Alice)."),
            vec!["hello", "said", "alice"]
        );
    }

    #[test]
    fn test_drops_inner_punctuation() {
        assert_eq!(tokens("e-mail 3.14 plain"), vec!["plain"]);
    }

    #[test]
    fn test_clitics_split_off() {
        assert_eq!(tokens("Python's syntax isn't hard"), vec!["python", "syntax", "hard"]);
    }

    #[test]
    fn test_punctuation_only_text() {
        assert!(tokens("... !!! ,").is_empty());
    }

    #[test]
    fn test_closure_tokenizer() {
        let split = |text: &str| text.split(',').map(str::to_string).collect::<Vec<_>>();
        assert_eq!(split.tokenize("a,b"), vec!["a", "b"]);
    }
}
