// Combined TF-IDF score: tf * idf per word per document.

use std::collections::BTreeMap;

use anyhow::{bail, Result};

/// Multiply a document's term frequencies by the shared IDF values.
///
/// Every word in a TF map must have an IDF entry, because the vocabulary
/// is built as the union over all documents before IDF is computed. A
/// miss here is an internal invariant violation, so the run fails fast
/// instead of silently scoring the word as zero.
///
/// Vocabulary words absent from the document are omitted from the result
/// (their score would be zero and is not materialized).
pub fn combine(
    term_frequencies: &BTreeMap<String, f64>,
    idf: &BTreeMap<String, f64>,
) -> Result<BTreeMap<String, f64>> {
    let mut scores = BTreeMap::new();
    for (word, &tf) in term_frequencies {
        let Some(&idf_value) = idf.get(word) else {
            bail!("No IDF entry for word {word:?} — vocabulary and documents are out of sync");
        };
        scores.insert(word.clone(), tf * idf_value);
    }
    Ok(scores)
}
