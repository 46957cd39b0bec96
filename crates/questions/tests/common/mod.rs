use questions_rank::Corpus;
use std::path::Path;
use tempfile::TempDir;

pub const PYTHON: &str = "Python is a programming language created by Guido van Rossum. \
Python emphasizes code readability.\nThe language was first released in 1991.";

pub const NEURAL: &str = "A neural network is a model inspired by the brain. \
Neural networks learn weights from training data.";

pub const RUST: &str = "Rust is a systems programming language focused on memory safety. \
Rust was first released in 2015.";

/// Three-document corpus on disk, plus one file the `txt` filter skips
pub fn sample_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "python.txt", PYTHON);
    write(dir.path(), "neural_network.txt", NEURAL);
    write(dir.path(), "rust.txt", RUST);
    write(dir.path(), "notes.log", "Python Python Python Python Python");
    dir
}

fn write(dir: &Path, name: &str, text: &str) {
    std::fs::write(dir.join(name), text).unwrap();
}

pub fn corpus(docs: &[(&str, &[&str])]) -> Corpus {
    docs.iter()
        .map(|(id, tokens)| {
            (
                id.to_string(),
                tokens.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}
