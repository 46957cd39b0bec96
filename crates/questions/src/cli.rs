use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "questions")]
#[command(version)]
#[command(about = "Answer questions from a directory of text files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer questions against a corpus (interactive unless --query is given)
    Ask {
        /// Directory of text files
        corpus: PathBuf,

        #[command(flatten)]
        options: CorpusOptions,

        /// Answer a single question and exit
        #[arg(short, long)]
        query: Option<String>,

        /// Print answers as JSON
        #[arg(long, conflicts_with = "scores")]
        json: bool,

        /// Show file and sentence scores
        #[arg(long)]
        scores: bool,
    },

    /// Show vocabulary statistics for a corpus
    Stats {
        /// Directory of text files
        corpus: PathBuf,

        #[command(flatten)]
        options: CorpusOptions,

        /// Number of rarest and commonest terms to list
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print version information
    Version,
}

/// Settings shared by every command that loads a corpus
#[derive(Args, Debug, Clone, Default)]
pub struct CorpusOptions {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of top files to search for sentences
    #[arg(short, long)]
    pub files: Option<usize>,

    /// Number of sentences to print per question
    #[arg(short, long)]
    pub sentences: Option<usize>,

    /// Only load files with this extension (repeatable)
    #[arg(long = "ext")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Scores,
    Json,
}

pub fn format(json: bool, scores: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if scores {
        OutputFormat::Scores
    } else {
        OutputFormat::Plain
    }
}
