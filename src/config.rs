use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Configuration for a scoring run.
///
/// The folder path resolves from, in order: the CLI argument, the
/// KILN_FOLDER environment variable (a .env file is honored at startup),
/// and finally an interactive prompt.
pub struct Config {
    /// Root directory to scan for text files (non-recursive).
    pub folder: PathBuf,
}

impl Config {
    /// Resolve the folder path from the CLI argument, environment, or prompt.
    pub fn resolve(cli_folder: Option<PathBuf>) -> Result<Self> {
        let folder = match cli_folder {
            Some(path) => path,
            None => match env::var("KILN_FOLDER") {
                Ok(value) if !value.is_empty() => PathBuf::from(value),
                _ => prompt_for_folder()?,
            },
        };

        if !folder.is_dir() {
            anyhow::bail!(
                "{} is not a folder. Pass a directory containing the text files to score.",
                folder.display()
            );
        }

        Ok(Self { folder })
    }
}

/// Ask for the folder path on stdin.
fn prompt_for_folder() -> Result<PathBuf> {
    print!("Folder to scan: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read folder path from stdin")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        anyhow::bail!("No folder path given");
    }
    Ok(PathBuf::from(trimmed))
}
