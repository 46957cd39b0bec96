pub mod ask;
pub mod stats;
pub mod version;

use crate::cli::CorpusOptions;
use questions_core::{load_files, Config, QuestionAnswerer};
use std::path::Path;

/// Defaults, then the config file, then command-line flags
pub fn resolve_config(options: &CorpusOptions) -> anyhow::Result<Config> {
    let mut config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(files) = options.files {
        config.file_matches = files;
    }
    if let Some(sentences) = options.sentences {
        config.sentence_matches = sentences;
    }
    if !options.extensions.is_empty() {
        config.extensions = options.extensions.clone();
    }

    config.validate()?;
    Ok(config)
}

pub fn build_answerer(corpus: &Path, options: &CorpusOptions) -> anyhow::Result<QuestionAnswerer> {
    let config = resolve_config(options)?;
    let files = load_files(corpus, &config)?;
    QuestionAnswerer::new(files, config)
}
