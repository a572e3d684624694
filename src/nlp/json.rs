//! JSON interface for externally tagged documents
//!
//! When an external tagger (spaCy or similar) has already segmented and
//! tagged the text, its output can be passed in as JSON:
//!
//! ```json
//! {"sentences": [[{"text": "Rent", "pos": "NOUN", "is_stop": false}]]}
//! ```
//!
//! `pos` uses spaCy's universal tags. `is_stop` (or `is_stopword`), `start`
//! and `end` are optional.

use crate::errors::Result;
use crate::pipeline::traits::Preprocessor;
use crate::types::{PosTag, Sentence, Token};
use serde::Deserialize;

/// Input token from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonToken {
    pub text: String,
    pub pos: String,
    #[serde(default, alias = "is_stop")]
    pub is_stopword: bool,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

impl From<JsonToken> for Token {
    fn from(jt: JsonToken) -> Self {
        let start = jt.start.unwrap_or(0);
        let end = jt.end.unwrap_or(start + jt.text.len());
        Token::new(jt.text, PosTag::from_spacy(&jt.pos))
            .with_span(start, end)
            .with_stopword(jt.is_stopword)
    }
}

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    pub sentences: Vec<Vec<JsonToken>>,
}

impl JsonDocument {
    /// Parse a document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into annotated sentences
    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
            .into_iter()
            .enumerate()
            .map(|(i, tokens)| Sentence::new(i, tokens.into_iter().map(Token::from).collect()))
            .collect()
    }
}

/// Preprocessor whose input text is a serialized [`JsonDocument`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPreprocessor;

impl Preprocessor for JsonPreprocessor {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>> {
        Ok(JsonDocument::from_json(text)?.into_sentences())
    }
}
