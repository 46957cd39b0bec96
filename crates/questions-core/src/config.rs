//! Configuration for the question answerer

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Answerer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Files kept after TF-IDF ranking
    pub file_matches: usize,

    /// Sentences returned per question
    pub sentence_matches: usize,

    /// Only load files with these extensions (all files if empty)
    pub extensions: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
            extensions: Vec::new(),
        }
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_matches == 0 {
            return Err(ConfigError::Invalid(
                "file_matches must be at least 1".to_string(),
            ));
        }
        if self.sentence_matches == 0 {
            return Err(ConfigError::Invalid(
                "sentence_matches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a corpus file passes the extension filter
    pub fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.file_matches, 1);
        assert_eq!(config.sentence_matches, 1);
        assert!(config.extensions.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"sentence_matches": 3}"#).unwrap();
        assert_eq!(config.file_matches, 1);
        assert_eq!(config.sentence_matches, 3);
    }

    #[test]
    fn test_zero_counts_invalid() {
        let config = Config {
            file_matches: 0,
            ..Config::new()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_extension_filter() {
        let config = Config {
            extensions: vec![".txt".to_string(), "md".to_string()],
            ..Config::new()
        };
        assert!(config.accepts(Path::new("python.txt")));
        assert!(config.accepts(Path::new("notes.MD")));
        assert!(!config.accepts(Path::new("image.png")));
        assert!(!config.accepts(Path::new("README")));
        assert!(Config::new().accepts(Path::new("README")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"file_matches": 2, "extensions": ["txt"]}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.file_matches, 2);
        assert_eq!(config.extensions, vec!["txt"]);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
