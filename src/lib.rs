//! # wordrank
//!
//! Graph-based keyword extraction.
//!
//! Qualifying words (by part of speech, minus stopwords) become nodes of a
//! co-occurrence graph; words seen within a sliding window of the same
//! sentence are linked. Scores are propagated over the column-normalized
//! graph with a damped power iteration and the highest-scoring words are
//! returned as keywords.
//!
//! ```no_run
//! use wordrank::{KeywordExtractor, TextRankConfig, Tokenizer};
//!
//! let config = TextRankConfig::default().with_window_size(4).with_top_n(5);
//! let extractor = KeywordExtractor::new(Tokenizer::new(), config)?;
//! for keyword in extractor.extract("The tenant paid rent to the landlord.")? {
//!     println!("{keyword}");
//! }
//! # Ok::<(), wordrank::TextRankError>(())
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod ranking;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{PairDedup, PosTag, Sentence, TextRankConfig, Token};

// Re-export main functionality
pub use graph::{builder::CooccurrenceGraph, pairs::CooccurrencePair, vocabulary::Vocabulary};
pub use nlp::{json::JsonPreprocessor, stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::{analyze_sentences, Analysis, KeywordExtractor, Preprocessor, WordSelector};
pub use ranking::{NodeWeight, RankedKeyword};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
