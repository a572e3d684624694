//! Natural Language Processing components
//!
//! Bundled preprocessors (tokenizer, JSON adapter) and stopword filtering.

pub mod json;
pub mod stopwords;
pub mod tokenizer;
