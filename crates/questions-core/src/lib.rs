//! Corpus loading, configuration and the two-stage answer pipeline

mod answerer;
mod config;
mod corpus;
mod types;

pub use answerer::QuestionAnswerer;
pub use config::{Config, ConfigError};
pub use corpus::{load_files, CorpusError};
pub use types::{Answer, CorpusStats, TermWeight};
