mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries answers
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            corpus,
            options,
            query,
            json,
            scores,
        } => {
            let format = cli::format(json, scores);
            commands::ask::run(&corpus, &options, query.as_deref(), format)
        }
        Commands::Stats {
            corpus,
            options,
            top,
            json,
        } => commands::stats::run(&corpus, &options, top, json),
        Commands::Version => commands::version::run(),
    }
}
