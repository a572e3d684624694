//! Core types for wordrank
//!
//! This module defines the annotated tokens and sentences handed over by a
//! preprocessor, and the configuration for a keyword extraction run.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Token
// ============================================================================

/// Part-of-speech tags
///
/// Serialized as spaCy's universal tags (`"NOUN"`, `"PROPN"`, ...); the
/// variant names are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "NOUN", alias = "Noun")]
    Noun,
    #[serde(rename = "VERB", alias = "AUX", alias = "Verb")]
    Verb,
    #[serde(rename = "ADJ", alias = "Adjective")]
    Adjective,
    #[serde(rename = "ADV", alias = "Adverb")]
    Adverb,
    #[serde(rename = "PRON", alias = "Pronoun")]
    Pronoun,
    #[serde(rename = "DET", alias = "Determiner")]
    Determiner,
    #[serde(rename = "ADP", alias = "Preposition")]
    Preposition,
    #[serde(rename = "CCONJ", alias = "SCONJ", alias = "Conjunction")]
    Conjunction,
    #[serde(rename = "INTJ", alias = "Interjection")]
    Interjection,
    #[serde(rename = "NUM", alias = "Numeral")]
    Numeral,
    #[serde(rename = "PART", alias = "Particle")]
    Particle,
    #[serde(rename = "PUNCT", alias = "Punctuation")]
    Punctuation,
    #[serde(rename = "SYM", alias = "Symbol")]
    Symbol,
    #[serde(rename = "PROPN", alias = "ProperNoun")]
    ProperNoun,
    #[serde(rename = "X", alias = "Other")]
    Other,
}

impl PosTag {
    /// Parse from spaCy-style POS tag
    pub fn from_spacy(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" | "AUX" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "PROPN" => PosTag::ProperNoun,
            _ => PosTag::Other,
        }
    }

    /// Get the spaCy-style POS tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }
}

/// An annotated token produced by a preprocessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Whether the preprocessor classified this token as a stopword
    pub is_stopword: bool,
    /// Byte offset (start) in original text
    pub start: usize,
    /// Byte offset (end) in original text
    pub end: usize,
}

impl Token {
    /// Create a new token without offsets
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            pos,
            is_stopword: false,
            start: 0,
            end,
        }
    }

    /// Builder method: set byte offsets
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Builder method: mark as stopword
    pub fn with_stopword(mut self, is_stopword: bool) -> Self {
        self.is_stopword = is_stopword;
        self
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text with its annotated tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence index within the document
    pub index: usize,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text
    pub end: usize,
    /// Tokens in reading order
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(index: usize, tokens: Vec<Token>) -> Self {
        let start = tokens.first().map_or(0, |t| t.start);
        let end = tokens.last().map_or(0, |t| t.end);
        Self {
            index,
            start,
            end,
            tokens,
        }
    }

    /// Number of tokens in the sentence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ============================================================================
// Pair Deduplication
// ============================================================================

/// How co-occurrence pairs are deduplicated before building the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairDedup {
    /// `(a, b)` and `(b, a)` are the same edge; the first seen ordering wins.
    #[default]
    Unordered,
    /// Only identical ordered tuples are merged. A pair seen in both
    /// orderings ends up with weight 2 after symmetrization.
    Ordered,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for keyword extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// POS tags a token must carry to enter the graph
    pub candidate_pos: Vec<PosTag>,
    /// Window size for co-occurrence pairs
    pub window_size: usize,
    /// Case-fold retained words
    pub lowercase: bool,
    /// Words excluded on top of the preprocessor's stopword flag
    pub extra_stopwords: Vec<String>,
    /// Damping factor, strictly between 0 and 1
    pub damping: f64,
    /// Stop when the total score changes by less than this
    pub convergence_threshold: f64,
    /// Maximum propagation steps
    pub max_steps: usize,
    /// Number of keywords returned by `extract`
    pub top_n: usize,
    /// Pair deduplication mode
    pub pair_dedup: PairDedup,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            candidate_pos: vec![PosTag::Noun, PosTag::ProperNoun],
            window_size: 4,
            lowercase: false,
            extra_stopwords: Vec::new(),
            damping: 0.85,
            convergence_threshold: 1e-5,
            max_steps: 10,
            top_n: 10,
            pair_dedup: PairDedup::Unordered,
        }
    }
}

impl TextRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a config from JSON and validate it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || self.damping <= 0.0 || self.damping >= 1.0 {
            return Err(TextRankError::invalid_config(format!(
                "damping must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }

        if !self.convergence_threshold.is_finite() || self.convergence_threshold <= 0.0 {
            return Err(TextRankError::invalid_config(format!(
                "convergence_threshold must be > 0, got {}",
                self.convergence_threshold
            )));
        }

        if self.max_steps == 0 {
            return Err(TextRankError::invalid_config("max_steps must be > 0"));
        }

        if self.window_size < 2 {
            return Err(TextRankError::invalid_config(format!(
                "window_size must be >= 2, got {}",
                self.window_size
            )));
        }

        if self.candidate_pos.is_empty() {
            return Err(TextRankError::invalid_config(
                "candidate_pos must name at least one tag",
            ));
        }

        Ok(())
    }

    /// Builder method: set candidate POS tags
    pub fn with_candidate_pos(mut self, tags: impl Into<Vec<PosTag>>) -> Self {
        self.candidate_pos = tags.into();
        self
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: case-fold retained words
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Builder method: set extra stopwords
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set maximum propagation steps
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Builder method: set top N keywords to return
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set pair deduplication mode
    pub fn with_pair_dedup(mut self, dedup: PairDedup) -> Self {
        self.pair_dedup = dedup;
        self
    }
}
