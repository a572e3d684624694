//! Keyword ranking
//!
//! [`NodeWeight`] pairs every vocabulary word with its final score, in
//! vocabulary order. [`rank`] sorts it by score descending; ties keep
//! insertion order so the output is deterministic.

use crate::graph::vocabulary::Vocabulary;
use crate::pagerank::PageRankResult;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Insertion-ordered word -> score mapping
#[derive(Debug, Clone, Default)]
pub struct NodeWeight {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl NodeWeight {
    /// Pair each vocabulary word with its propagated score
    pub fn from_scores(vocab: &Vocabulary, result: &PageRankResult) -> Self {
        vocab
            .iter()
            .map(|(id, word)| (word.to_string(), result.score(id)))
            .collect()
    }

    /// Score of a word
    pub fn get(&self, word: &str) -> Option<f64> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /// Iterate over `(word, score)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(w, s)| (w.as_str(), *s))
    }

    /// Get the number of words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for NodeWeight {
    /// Later duplicates overwrite the score but keep the first position.
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut weights = NodeWeight::default();
        for (word, score) in iter {
            match weights.index.get(&word) {
                Some(&i) => weights.entries[i].1 = score,
                None => {
                    weights.index.insert(word.clone(), weights.entries.len());
                    weights.entries.push((word, score));
                }
            }
        }
        weights
    }
}

impl Serialize for NodeWeight {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, score) in &self.entries {
            map.serialize_entry(word, score)?;
        }
        map.end()
    }
}

/// A word with its score and 1-based position in the ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub word: String,
    pub score: f64,
    pub rank: usize,
}

impl fmt::Display for RankedKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.word, self.score)
    }
}

/// Higher score first, equal scores by vocabulary position.
fn score_cmp(a: (usize, f64), b: (usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Every word ordered by score descending
pub fn rank(weights: &NodeWeight) -> Vec<RankedKeyword> {
    let mut order: Vec<(usize, f64)> = weights
        .entries
        .iter()
        .enumerate()
        .map(|(i, (_, score))| (i, *score))
        .collect();
    order.sort_by(|&a, &b| score_cmp(a, b));

    order
        .into_iter()
        .enumerate()
        .map(|(position, (i, score))| RankedKeyword {
            word: weights.entries[i].0.clone(),
            score,
            rank: position + 1,
        })
        .collect()
}

/// The `n` highest-scoring words (fewer if the vocabulary is smaller)
pub fn top_n(weights: &NodeWeight, n: usize) -> Vec<RankedKeyword> {
    let mut ranked = rank(weights);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(raw: &[(&str, f64)]) -> NodeWeight {
        raw.iter().map(|&(w, s)| (w.to_string(), s)).collect()
    }

    #[test]
    fn test_rank_descending() {
        let nw = weights(&[("alpha", 0.5), ("beta", 1.2), ("gamma", 0.8)]);
        let ranked = rank(&nw);
        let words: Vec<_> = ranked.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["beta", "gamma", "alpha"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let nw = weights(&[("gamma", 0.5), ("alpha", 0.5), ("beta", 0.7), ("delta", 0.5)]);
        let words: Vec<_> = rank(&nw).into_iter().map(|k| k.word).collect();
        assert_eq!(words, vec!["beta", "gamma", "alpha", "delta"]);
    }

    #[test]
    fn test_top_n_exact_count() {
        let nw = weights(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]);
        assert_eq!(top_n(&nw, 2).len(), 2);
        assert_eq!(top_n(&nw, 0).len(), 0);
        assert_eq!(top_n(&nw, 10).len(), 4);
        assert_eq!(top_n(&nw, 1)[0].word, "d");
    }

    #[test]
    fn test_rerank_is_idempotent() {
        let nw = weights(&[("a", 0.3), ("b", 0.9), ("c", 0.3), ("d", 0.6)]);
        let first = rank(&nw);
        let resorted: NodeWeight = first.iter().map(|k| (k.word.clone(), k.score)).collect();
        assert_eq!(rank(&resorted), first);
    }

    #[test]
    fn test_node_weight_lookup() {
        let nw = weights(&[("rent", 1.5), ("board", 0.7)]);
        assert_eq!(nw.get("rent"), Some(1.5));
        assert_eq!(nw.get("court"), None);
        assert_eq!(nw.len(), 2);
        assert_eq!(nw.iter().next(), Some(("rent", 1.5)));
    }

    #[test]
    fn test_duplicate_keys_keep_first_position() {
        let nw = weights(&[("a", 1.0), ("b", 2.0), ("a", 3.0)]);
        assert_eq!(nw.len(), 2);
        assert_eq!(nw.get("a"), Some(3.0));
        assert_eq!(nw.iter().next(), Some(("a", 3.0)));
    }

    #[test]
    fn test_serialize_preserves_order() {
        let nw = weights(&[("zeta", 1.0), ("alpha", 2.0)]);
        let json = serde_json::to_string(&nw).unwrap();
        assert_eq!(json, r#"{"zeta":1.0,"alpha":2.0}"#);
    }

    #[test]
    fn test_display() {
        let kw = RankedKeyword {
            word: "premises".to_string(),
            score: 2.5,
            rank: 1,
        };
        assert_eq!(kw.to_string(), "premises - 2.5");
    }

    #[test]
    fn test_empty() {
        assert!(rank(&NodeWeight::default()).is_empty());
    }
}
