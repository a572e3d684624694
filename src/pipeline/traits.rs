//! Stage boundaries for the extraction pipeline.
//!
//! The linguistic preprocessor is the only collaborator the pipeline talks
//! to; everything downstream of [`WordSelector`] works on plain words and
//! indices.

use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Sentence, TextRankConfig};

// ============================================================================
// Preprocessor — raw text to annotated sentences
// ============================================================================

/// Turns raw text into sentences of annotated tokens.
///
/// # Contract
///
/// - **Input**: raw text, already acquired and cleaned.
/// - **Output**: sentences in reading order; each token carries its surface
///   text, a POS tag and a stopword flag.
/// - Called exactly once per analysis run. Any error is returned to the
///   caller unchanged.
///
/// Implementations are injected into [`KeywordExtractor`], so tests can
/// substitute a deterministic fake.
///
/// [`KeywordExtractor`]: crate::pipeline::runner::KeywordExtractor
pub trait Preprocessor {
    /// Annotate `text`.
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>>;
}

impl<T: Preprocessor + ?Sized> Preprocessor for &T {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>> {
        (**self).annotate(text)
    }
}

impl<T: Preprocessor + ?Sized> Preprocessor for Box<T> {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>> {
        (**self).annotate(text)
    }
}

// ============================================================================
// WordSelector — annotated sentences to qualifying words
// ============================================================================

/// Keeps the tokens that participate in the graph.
///
/// A token qualifies when its POS tag is one of `candidate_pos`, the
/// preprocessor did not flag it as a stopword, and it is not one of the
/// run's `extra_stopwords` (case-insensitive). Retained words are
/// lower-cased when `lowercase` is set. Sentence structure is preserved,
/// so a sentence may come out empty.
#[derive(Debug, Clone)]
pub struct WordSelector<'a> {
    config: &'a TextRankConfig,
    extra_stopwords: StopwordFilter,
}

impl<'a> WordSelector<'a> {
    /// Create a selector for one run
    pub fn new(config: &'a TextRankConfig) -> Self {
        Self {
            config,
            extra_stopwords: StopwordFilter::from_list(&config.extra_stopwords),
        }
    }

    /// Select qualifying words, grouped by sentence
    pub fn select(&self, sentences: &[Sentence]) -> Vec<Vec<String>> {
        sentences
            .iter()
            .map(|sentence| {
                sentence
                    .tokens
                    .iter()
                    .filter(|t| {
                        !t.is_stopword
                            && self.config.candidate_pos.contains(&t.pos)
                            && !self.extra_stopwords.is_stopword(&t.text)
                    })
                    .map(|t| {
                        if self.config.lowercase {
                            t.text.to_lowercase()
                        } else {
                            t.text.clone()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PosTag, Token};

    fn sentence(tokens: &[(&str, PosTag, bool)]) -> Sentence {
        Sentence::new(
            0,
            tokens
                .iter()
                .map(|&(text, pos, stop)| Token::new(text, pos).with_stopword(stop))
                .collect(),
        )
    }

    #[test]
    fn test_filters_pos_and_stopwords() {
        let config = TextRankConfig::default();
        let sents = vec![sentence(&[
            ("The", PosTag::Determiner, true),
            ("plaintiff", PosTag::Noun, false),
            ("filed", PosTag::Verb, false),
            ("Galle", PosTag::ProperNoun, false),
            ("one", PosTag::Noun, true),
        ])];

        let selected = WordSelector::new(&config).select(&sents);
        assert_eq!(selected, vec![vec!["plaintiff".to_string(), "Galle".to_string()]]);
    }

    #[test]
    fn test_extra_stopwords_case_insensitive() {
        let config = TextRankConfig::default().with_extra_stopwords(["court"]);
        let sents = vec![sentence(&[
            ("Court", PosTag::ProperNoun, false),
            ("appeal", PosTag::Noun, false),
        ])];

        let selected = WordSelector::new(&config).select(&sents);
        assert_eq!(selected, vec![vec!["appeal".to_string()]]);
    }

    #[test]
    fn test_lowercase() {
        let config = TextRankConfig::default().with_lowercase(true);
        let sents = vec![sentence(&[("Rent", PosTag::Noun, false)])];

        let selected = WordSelector::new(&config).select(&sents);
        assert_eq!(selected, vec![vec!["rent".to_string()]]);
    }

    #[test]
    fn test_keeps_empty_sentences() {
        let config = TextRankConfig::default();
        let sents = vec![
            sentence(&[("quickly", PosTag::Adverb, false)]),
            sentence(&[("tenant", PosTag::Noun, false)]),
        ];

        let selected = WordSelector::new(&config).select(&sents);
        assert_eq!(selected.len(), 2);
        assert!(selected[0].is_empty());
    }

    #[test]
    fn test_custom_candidate_pos() {
        let config = TextRankConfig::default().with_candidate_pos([PosTag::Verb]);
        let sents = vec![sentence(&[
            ("filed", PosTag::Verb, false),
            ("action", PosTag::Noun, false),
        ])];

        let selected = WordSelector::new(&config).select(&sents);
        assert_eq!(selected, vec![vec!["filed".to_string()]]);
    }
}
