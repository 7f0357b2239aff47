use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use kiln::config::Config;
use kiln::output::terminal;
use kiln::pipeline::run;

/// Kiln: TF-IDF keyword scoring for plain-text corpora.
///
/// Scores every word of every text file directly inside a folder and
/// writes one `tfidf<name><index>.csv` per file, next to the inputs.
#[derive(Parser)]
#[command(name = "kiln", version, about)]
struct Cli {
    /// Folder containing the text files to score.
    ///
    /// Falls back to KILN_FOLDER, then to an interactive prompt.
    folder: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kiln=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.folder)?;

    let summary = run::run(&config.folder)?;
    terminal::display_summary(&summary);

    Ok(())
}
