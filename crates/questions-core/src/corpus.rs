//! Loading a directory of text files

use crate::Config;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("corpus path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no corpus files found in {0}")]
    Empty(PathBuf),
}

/// Read every regular file directly inside `dir`, keyed by file name.
pub fn load_files(dir: &Path, config: &Config) -> Result<BTreeMap<String, String>, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory(dir.to_path_buf()));
    }

    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| CorpusError::Io { path, source }
    };

    let mut files = BTreeMap::new();
    for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let path = entry.path();
        if !path.is_file() || !config.accepts(&path) {
            tracing::debug!(path = %path.display(), "skipping corpus entry");
            continue;
        }

        let bytes = std::fs::read(&path).map_err(io_err(&path))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        files.insert(entry.file_name().to_string_lossy().into_owned(), text);
    }

    if files.is_empty() {
        return Err(CorpusError::Empty(dir.to_path_buf()));
    }

    tracing::info!(files = files.len(), dir = %dir.display(), "loaded corpus");
    Ok(files)
}
