// Document loading — file to word-count map, feeding the shared vocabulary.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use super::tokenizer::tokenize_line;
use super::vocabulary::Vocabulary;
use super::Document;

/// Load one document: read the file line by line, tokenize, and count.
///
/// Every distinct word also lands in the shared vocabulary, which stays
/// exactly the union of the loaded documents' word sets. A file that
/// cannot be opened or read is logged and treated as an empty document;
/// the run keeps going (best-effort, per-file isolation).
pub fn load_document(path: &Path, vocabulary: &mut Vocabulary) -> Document {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let word_counts = match read_word_counts(path) {
        Ok(counts) => counts,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Failed to read document, treating as empty"
            );
            BTreeMap::new()
        }
    };

    // Only a fully read document contributes to the vocabulary.
    for word in word_counts.keys() {
        vocabulary.insert(word);
    }

    Document {
        name,
        word_counts,
        term_frequencies: BTreeMap::new(),
    }
}

/// Read and tokenize the file into a sorted word → count map.
fn read_word_counts(path: &Path) -> std::io::Result<BTreeMap<String, u32>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for line in reader.lines() {
        let line = line?;
        for token in tokenize_line(&line) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    Ok(counts)
}
