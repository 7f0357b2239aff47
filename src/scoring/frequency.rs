// Term frequency and inverse document frequency.
//
// TF is per document: count / total words in that document. IDF is
// corpus-wide: 1 + ln(N / df), the smoothed textbook definition. Both are
// pure functions over immutable inputs, computed once per run.

use std::collections::BTreeMap;

use crate::corpus::vocabulary::Vocabulary;
use crate::corpus::Document;

/// Compute term frequencies for one document's word-count map.
///
/// Each value is `count / totalWords`, so the frequencies of a non-empty
/// document sum to 1. An empty document yields an empty map rather than
/// dividing by zero.
pub fn term_frequency(word_counts: &BTreeMap<String, u32>) -> BTreeMap<String, f64> {
    let total_words: u64 = word_counts.values().map(|&c| u64::from(c)).sum();
    if total_words == 0 {
        return BTreeMap::new();
    }

    word_counts
        .iter()
        .map(|(word, &count)| (word.clone(), f64::from(count) / total_words as f64))
        .collect()
}

/// Compute the corpus-wide IDF map: one entry per vocabulary word.
///
/// `df` counts the documents containing the word at least once. The
/// vocabulary is the union of all documents' words, so `df >= 1` and the
/// logarithm is always defined; a word present in every document gets
/// exactly 1.0.
pub fn inverse_document_frequency(
    documents: &[Document],
    vocabulary: &Vocabulary,
) -> BTreeMap<String, f64> {
    let total_docs = documents.len();
    let mut idf = BTreeMap::new();

    for word in vocabulary.iter() {
        let doc_frequency = documents
            .iter()
            .filter(|doc| doc.word_counts.contains_key(word))
            .count();
        let value = 1.0 + (total_docs as f64 / doc_frequency as f64).ln();
        idf.insert(word.to_string(), value);
    }

    idf
}
