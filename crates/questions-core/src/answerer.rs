//! Two-stage answer pipeline: rank files, then sentences within them

use crate::{Answer, Config, CorpusStats, TermWeight};
use anyhow::Result;
use questions_rank::{compute_idf, score_files, score_sentences, Corpus, IdfTable, Query};
use questions_text::{sentence_corpus, Tokenizer, WordTokenizer};
use std::collections::BTreeMap;

/// Answers questions against a fixed set of documents.
///
/// Files are tokenized and the file-level IDF table is computed once at
/// construction. Each question builds its own sentence corpus from the
/// winning files.
///
/// Answers keep their scores, so ranking goes through `score_files` and
/// `score_sentences` and truncates to the configured counts. Those counts
/// are checked non-zero by `Config::validate` in the constructor, the same
/// guard `top_files`/`top_sentences` apply per call.
pub struct QuestionAnswerer<T = WordTokenizer> {
    config: Config,
    tokenizer: T,
    files: BTreeMap<String, String>,
    file_words: Corpus,
    file_idf: IdfTable,
}

impl QuestionAnswerer<WordTokenizer> {
    pub fn new(files: BTreeMap<String, String>, config: Config) -> Result<Self> {
        Self::with_tokenizer(files, WordTokenizer::new(), config)
    }
}

impl<T: Tokenizer> QuestionAnswerer<T> {
    pub fn with_tokenizer(
        files: BTreeMap<String, String>,
        tokenizer: T,
        config: Config,
    ) -> Result<Self> {
        config.validate()?;

        let file_words: Corpus = files
            .iter()
            .map(|(name, text)| (name.clone(), tokenizer.tokenize(text)))
            .collect();
        let file_idf = compute_idf(&file_words)?;

        tracing::info!(
            files = file_words.len(),
            vocabulary = file_idf.len(),
            "indexed corpus"
        );

        Ok(Self {
            config,
            tokenizer,
            files,
            file_words,
            file_idf,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalize a question into a set of query words
    pub fn query(&self, question: &str) -> Query {
        self.tokenizer.tokenize(question).into_iter().collect()
    }

    pub fn answer(&self, question: &str) -> Result<Answer> {
        let query = self.query(question);
        if query.is_empty() {
            tracing::warn!("question has no searchable words");
            return Ok(Answer::empty());
        }

        let sorted_query: Vec<String> = query.iter().cloned().collect();

        let mut files = score_files(&query, &self.file_words, &self.file_idf);
        files.truncate(self.config.file_matches);
        tracing::debug!(files = ?files.iter().map(|f| &f.id).collect::<Vec<_>>(), "top files");

        let texts = files
            .iter()
            .filter_map(|f| self.files.get(&f.id))
            .map(String::as_str);
        let sentences = sentence_corpus(texts, &self.tokenizer);
        if sentences.is_empty() {
            tracing::warn!("top files contain no sentences");
            return Ok(Answer {
                query: sorted_query,
                files,
                sentences: Vec::new(),
            });
        }

        let sentence_idf = compute_idf(&sentences)?;
        let mut ranked = score_sentences(&query, &sentences, &sentence_idf);
        ranked.truncate(self.config.sentence_matches);
        tracing::debug!(
            candidates = sentences.len(),
            returned = ranked.len(),
            "ranked sentences"
        );

        Ok(Answer {
            query: sorted_query,
            files,
            sentences: ranked,
        })
    }

    /// File-level index summary with the `top` rarest and commonest terms
    pub fn stats(&self, top: usize) -> CorpusStats {
        let mut terms: Vec<TermWeight> = self
            .file_idf
            .terms()
            .into_iter()
            .map(|(term, idf)| TermWeight {
                term: term.to_string(),
                idf,
            })
            .collect();

        // terms() is already ordered by token, so a stable sort keeps ties alphabetical
        terms.sort_by(|a, b| b.idf.total_cmp(&a.idf));
        let rarest = terms.iter().take(top).cloned().collect();
        terms.sort_by(|a, b| a.idf.total_cmp(&b.idf).then_with(|| a.term.cmp(&b.term)));
        let commonest = terms.into_iter().take(top).collect();

        CorpusStats {
            files: self.file_words.len(),
            vocabulary: self.file_idf.len(),
            rarest,
            commonest,
        }
    }
}
