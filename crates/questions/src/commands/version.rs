pub fn run() -> anyhow::Result<()> {
    println!("questions {}", env!("CARGO_PKG_VERSION"));
    println!("TF-IDF question answering over plain text corpora");
    Ok(())
}
