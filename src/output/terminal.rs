// Terminal summary for a completed scoring run.
//
// All terminal-specific formatting lives here; main.rs delegates.

use colored::Colorize;

use crate::pipeline::run::RunSummary;

/// Display the run summary: corpus stats and the CSVs written.
pub fn display_summary(summary: &RunSummary) {
    if summary.documents == 0 {
        println!("No regular files found in {}.", summary.folder.display());
        return;
    }

    println!(
        "\n{}",
        format!("=== TF-IDF run ({} documents) ===", summary.documents).bold()
    );
    println!();
    println!("  Folder:     {}", summary.folder.display());
    println!("  Vocabulary: {} distinct words", summary.vocabulary_size);
    println!();

    for output in &summary.outputs {
        println!("  {} {}", "->".green(), output.display());
    }

    println!();
    println!(
        "  {} {} CSV file(s) written",
        "ok".green().bold(),
        summary.outputs.len()
    );
}
