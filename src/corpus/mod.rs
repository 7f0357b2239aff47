// Corpus model — documents, tokenization, and the shared vocabulary.

pub mod loader;
pub mod tokenizer;
pub mod vocabulary;

use std::collections::BTreeMap;

/// One input file, with its word counts and (once computed) term frequencies.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name (not the full path) — used to derive the output CSV name.
    pub name: String,
    /// Normalized word → occurrence count. Sorted by key; fixed after loading.
    pub word_counts: BTreeMap<String, u32>,
    /// Normalized word → count / total. Empty for an empty document.
    pub term_frequencies: BTreeMap<String, f64>,
}
