//! Vocabulary construction
//!
//! Assigns each distinct qualifying word a dense index in first-occurrence
//! order. The hash map and the dense vector are two views over the same
//! entries: `words[index_of(w)] == w`.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// An insertion-ordered word -> index mapping
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Maps words to their dense index
    word_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps indices back to words, in first-occurrence order
    id_to_word: Vec<Arc<str>>,
}

impl Vocabulary {
    /// Create a new empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_word: Vec::with_capacity(capacity),
        }
    }

    /// Build a vocabulary by scanning sentences in order
    pub fn from_sentences<S: AsRef<str>>(sentences: &[Vec<S>]) -> Self {
        let total: usize = sentences.iter().map(Vec::len).sum();
        let mut vocab = Self::with_capacity(total);
        for sentence in sentences {
            for word in sentence {
                if vocab.insert(word.as_ref()).is_none() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(words = vocab.len(), "vocabulary index space exhausted");
                    return vocab;
                }
            }
        }
        vocab
    }

    /// Insert a word, returning its index. Re-inserting is a no-op.
    ///
    /// Returns `None` once the `u32` index space is exhausted; the word is
    /// then not added.
    pub fn insert(&mut self, word: &str) -> Option<u32> {
        if let Some(&id) = self.word_to_id.get(word) {
            return Some(id);
        }

        let id = next_id(self.id_to_word.len())?;
        let arc: Arc<str> = word.into();
        self.word_to_id.insert(arc.clone(), id);
        self.id_to_word.push(arc);
        Some(id)
    }

    /// Get the index assigned to a word
    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Get the word at an index
    pub fn word(&self, id: u32) -> Option<&str> {
        self.id_to_word.get(id as usize).map(|w| w.as_ref())
    }

    /// Translate sentences of words into sentences of indices.
    ///
    /// Words missing from the vocabulary are dropped; for a vocabulary built
    /// from the same sentences this never happens.
    pub fn encode<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> Vec<Vec<u32>> {
        sentences
            .iter()
            .map(|sentence| {
                sentence
                    .iter()
                    .filter_map(|w| self.index_of(w.as_ref()))
                    .collect()
            })
            .collect()
    }

    /// Iterate over `(index, word)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.id_to_word
            .iter()
            .enumerate()
            .map(|(i, w)| (i as u32, w.as_ref()))
    }

    /// Get the number of distinct words
    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_word.is_empty()
    }
}

/// Next dense index for a vocabulary of `len` words
fn next_id(len: usize) -> Option<u32> {
    let id = u32::try_from(len).ok();
    debug_assert!(id.is_some(), "vocabulary exceeds the u32 index space");
    id
}
