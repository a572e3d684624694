//! Graph construction
//!
//! Vocabulary, co-occurrence pairs and the normalized adjacency matrix.

pub mod builder;
pub mod pairs;
pub mod vocabulary;
