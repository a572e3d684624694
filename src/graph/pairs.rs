//! Co-occurrence pair extraction
//!
//! Slides a window of `window_size` qualifying words over each sentence and
//! emits every pair of distinct words that fall inside it. Windows never cross
//! sentence boundaries.

use crate::types::PairDedup;
use rustc_hash::FxHashSet;

/// Two vocabulary indices seen within one window, in encounter order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CooccurrencePair {
    pub first: u32,
    pub second: u32,
}

impl CooccurrencePair {
    /// Create a new pair
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// Orientation-independent key: `(min, max)`
    pub fn unordered_key(&self) -> (u32, u32) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    fn dedup_key(&self, dedup: PairDedup) -> (u32, u32) {
        match dedup {
            PairDedup::Ordered => (self.first, self.second),
            PairDedup::Unordered => self.unordered_key(),
        }
    }
}

/// Extract deduplicated co-occurrence pairs from index-encoded sentences.
///
/// For each position `i` the window covers positions `i + 1 .. i + window_size`
/// clipped to the sentence. Pairs of two identical words are skipped. Output
/// keeps first-encounter order.
pub fn extract_pairs(
    sentences: &[Vec<u32>],
    window_size: usize,
    dedup: PairDedup,
) -> Vec<CooccurrencePair> {
    let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
    let mut pairs = Vec::new();

    for sentence in sentences {
        for (i, &word) in sentence.iter().enumerate() {
            let window_end = i.saturating_add(window_size).min(sentence.len());
            for &other in &sentence[(i + 1).min(window_end)..window_end] {
                if word == other {
                    continue;
                }
                let pair = CooccurrencePair::new(word, other);
                if seen.insert(pair.dedup_key(dedup)) {
                    pairs.push(pair);
                }
            }
        }
    }

    pairs
}
