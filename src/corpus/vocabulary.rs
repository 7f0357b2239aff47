// The shared vocabulary — every distinct normalized word in the corpus.

use std::collections::BTreeSet;

/// Ordered set of all distinct words seen across the corpus.
///
/// Words are lowercased before insertion, so the set's byte order is also
/// the case-insensitive order. Grows while documents load; read-only
/// during the scoring phase.
#[derive(Debug, Default)]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Idempotent — re-inserting an existing word is a no-op.
    pub fn insert(&mut self, word: &str) {
        if !self.words.contains(word) {
            self.words.insert(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the vocabulary in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
