//! Unicode-aware tokenization
//!
//! This module provides UAX #29 compliant word and sentence segmentation
//! with heuristic POS tagging. It is the built-in [`Preprocessor`]; for
//! accurate tags, annotate with an external tagger and feed the result
//! through [`JsonPreprocessor`](crate::nlp::json::JsonPreprocessor).

use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::traits::Preprocessor;
use crate::types::{PosTag, Sentence, Token};
use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length to consider
    min_token_length: usize,
    /// Marks `Token::is_stopword`
    stopwords: StopwordFilter,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with English stopwords
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
            stopwords: StopwordFilter::default(),
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Use the stopword list of another language
    pub fn with_language(mut self, language: &str) -> Self {
        self.stopwords = StopwordFilter::new(language);
        self
    }

    /// Use a custom stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Tokenize text into sentences of annotated tokens
    pub fn tokenize(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();

        for (start, end) in self.sentence_boundaries(text) {
            let sent_text = &text[start..end];
            let mut tokens = Vec::new();

            for (word_start, word) in sent_text.unicode_word_indices() {
                if word.chars().count() < self.min_token_length {
                    continue;
                }

                // Skip pure punctuation/symbols
                if !word.chars().any(|c| c.is_alphanumeric()) {
                    continue;
                }

                let abs_start = start + word_start;
                tokens.push(
                    Token::new(word, self.guess_pos(word))
                        .with_span(abs_start, abs_start + word.len())
                        .with_stopword(self.stopwords.is_stopword(word)),
                );
            }

            sentences.push(Sentence {
                index: sentences.len(),
                start,
                end,
                tokens,
            });
        }

        sentences
    }

    /// Find sentence boundaries in text
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        let mut start = 0;

        for (idx, _) in text.split_sentence_bound_indices() {
            if idx > start && !text[start..idx].trim().is_empty() {
                boundaries.push((start, idx));
            }
            start = idx;
        }

        // Handle last segment
        if start < text.len() && !text[start..].trim().is_empty() {
            boundaries.push((start, text.len()));
        }

        boundaries
    }

    /// Basic heuristic POS tagging
    ///
    /// This is intentionally simple; for accurate POS tags, use an external tagger.
    fn guess_pos(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase();

        if let Some(pos) = self.function_word_pos(&lower) {
            return pos;
        }

        // Numbers
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Numeral;
        }

        // Capitalized word (might be proper noun or sentence start)
        let mut chars = word.chars();
        if chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase) {
            return PosTag::ProperNoun;
        }

        // Common adjective suffixes
        if ["ful", "less", "ous", "ive", "able", "ible", "al", "ic"]
            .iter()
            .any(|s| lower.ends_with(s))
        {
            return PosTag::Adjective;
        }

        // Common verb suffixes
        if ["ing", "ed", "ize"].iter().any(|s| lower.ends_with(s)) {
            return PosTag::Verb;
        }

        if lower.ends_with("ly") {
            return PosTag::Adverb;
        }

        // Default to noun (most content words are nouns)
        PosTag::Noun
    }

    fn function_word_pos(&self, lower: &str) -> Option<PosTag> {
        let pos = match lower {
            "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
            | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no" => {
                PosTag::Determiner
            }
            "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while"
            | "though" | "although" | "when" | "unless" | "until" | "since" => PosTag::Conjunction,
            "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as"
            | "into" | "like" | "through" | "after" | "over" | "between" | "out" | "against"
            | "during" | "without" | "before" | "under" | "around" | "among" => PosTag::Preposition,
            "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
            | "who" | "which" | "what" | "myself" | "himself" | "herself" | "themselves" => {
                PosTag::Pronoun
            }
            "is" | "are" | "was" | "were" | "be" | "been" | "being" | "has" | "have" | "had"
            | "do" | "does" | "did" | "will" | "would" | "shall" | "should" | "may" | "might"
            | "must" | "can" | "could" => PosTag::Verb,
            "not" | "n't" => PosTag::Particle,
            _ => return None,
        };
        Some(pos)
    }
}

impl Preprocessor for Tokenizer {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>> {
        Ok(self.tokenize(text))
    }
}
