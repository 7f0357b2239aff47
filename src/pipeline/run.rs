// Two-phase scoring pipeline.
//
// Phase 1 walks the folder, loads every regular file, and computes each
// document's term frequencies while the shared vocabulary accumulates.
// Phase 2 computes the corpus-wide IDF from the complete vocabulary, then
// combines and writes one CSV per document. IDF depends on every
// document's word set, which is why the phases cannot be fused.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::corpus::loader::load_document;
use crate::corpus::vocabulary::Vocabulary;
use crate::corpus::Document;
use crate::output::csv::write_scores;
use crate::scoring::combine::combine;
use crate::scoring::frequency::{inverse_document_frequency, term_frequency};

/// Result of a completed run, for the terminal summary.
pub struct RunSummary {
    pub folder: PathBuf,
    pub documents: usize,
    pub vocabulary_size: usize,
    pub outputs: Vec<PathBuf>,
}

/// Run the full pipeline over every regular file directly inside `folder`.
///
/// Output CSVs land in the same folder, named
/// `tfidf<fileName><1-based index>.csv`.
pub fn run(folder: &Path) -> Result<RunSummary> {
    let files = discover_files(folder)?;
    info!(count = files.len(), folder = %folder.display(), "Scanning folder");

    // Phase 1: load documents and compute per-document TF.
    let mut vocabulary = Vocabulary::new();
    let mut documents: Vec<Document> = Vec::with_capacity(files.len());
    for path in &files {
        let mut document = load_document(path, &mut vocabulary);
        document.term_frequencies = term_frequency(&document.word_counts);
        debug!(
            name = %document.name,
            words = document.word_counts.len(),
            "Loaded document"
        );
        documents.push(document);
    }

    // Phase 2: corpus-wide IDF, then combine and write per document.
    let idf = inverse_document_frequency(&documents, &vocabulary);

    let mut outputs = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        let scores = combine(&document.term_frequencies, &idf)?;
        let out_path = folder.join(format!("tfidf{}{}.csv", document.name, index + 1));
        write_scores(&out_path, &scores)
            .with_context(|| format!("Failed to write scores for {}", document.name))?;
        info!(output = %out_path.display(), "Wrote scores");
        outputs.push(out_path);
    }

    Ok(RunSummary {
        folder: folder.to_path_buf(),
        documents: documents.len(),
        vocabulary_size: vocabulary.len(),
        outputs,
    })
}

/// List the regular files directly inside `folder`, sorted by name.
///
/// Non-recursive; directories and other non-file entries are skipped.
/// Directory listing order is filesystem-dependent, so the list is sorted
/// to keep the 1-based output indices stable across runs.
fn discover_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(folder)
        .with_context(|| format!("Failed to read folder {}", folder.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", folder.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
