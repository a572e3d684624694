//! Extraction pipeline: preprocessor seam, word selection and the runner.

pub mod runner;
pub mod traits;

pub use runner::{analyze_sentences, Analysis, KeywordExtractor};
pub use traits::{Preprocessor, WordSelector};
