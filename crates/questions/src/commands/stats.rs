use crate::cli::CorpusOptions;
use std::path::Path;

pub fn run(corpus: &Path, options: &CorpusOptions, top: usize, json: bool) -> anyhow::Result<()> {
    let qa = super::build_answerer(corpus, options)?;
    let stats = qa.stats(top);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Corpus: {}", corpus.display());
    println!("  files:      {}", stats.files);
    println!("  vocabulary: {}", stats.vocabulary);

    println!("\nRarest terms");
    for t in &stats.rarest {
        println!("  {:<24} {:.4}", t.term, t.idf);
    }

    println!("\nCommonest terms");
    for t in &stats.commonest {
        println!("  {:<24} {:.4}", t.term, t.idf);
    }

    Ok(())
}
