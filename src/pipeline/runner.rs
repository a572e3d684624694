//! Pipeline runner — orchestrates one keyword extraction run.
//!
//! [`KeywordExtractor`] owns a validated [`TextRankConfig`] and an injected
//! [`Preprocessor`]. Each call to [`KeywordExtractor::analyze`] builds its own
//! vocabulary, graph and score vector and returns them as an [`Analysis`];
//! nothing is kept on the extractor between calls.

use crate::errors::Result;
use crate::graph::builder::CooccurrenceGraph;
use crate::graph::pairs::extract_pairs;
use crate::graph::vocabulary::Vocabulary;
use crate::pagerank::standard::StandardPageRank;
use crate::pipeline::traits::{Preprocessor, WordSelector};
use crate::ranking::{self, NodeWeight, RankedKeyword};
use crate::types::{Sentence, TextRankConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
        #[cfg(not(feature = "tracing"))]
        let _ = $name;
    };
}

const STAGE_PREPROCESS: &str = "preprocess";
const STAGE_SELECT: &str = "select";
const STAGE_VOCABULARY: &str = "vocabulary";
const STAGE_PAIRS: &str = "pairs";
const STAGE_GRAPH: &str = "graph";
const STAGE_RANK: &str = "rank";

// ============================================================================
// Analysis — the value produced by one run
// ============================================================================

/// Scores and diagnostics from one analysis run
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Final score of every vocabulary word, in first-occurrence order
    pub node_weight: NodeWeight,
    /// Propagation steps performed
    pub iterations: usize,
    /// Whether the convergence test fired before the step budget ran out
    pub converged: bool,
    /// Number of distinct qualifying words
    pub vocabulary_size: usize,
    /// Number of deduplicated co-occurrence pairs
    pub pair_count: usize,
}

impl Analysis {
    /// Every word ordered by score descending
    pub fn ranked(&self) -> Vec<RankedKeyword> {
        ranking::rank(&self.node_weight)
    }

    /// The `n` highest-scoring words
    pub fn top_n(&self, n: usize) -> Vec<RankedKeyword> {
        ranking::top_n(&self.node_weight, n)
    }

    /// Check if no word qualified
    pub fn is_empty(&self) -> bool {
        self.node_weight.is_empty()
    }
}

/// Run word selection through scoring on already annotated sentences.
pub fn analyze_sentences(sentences: &[Sentence], config: &TextRankConfig) -> Result<Analysis> {
    config.validate()?;

    let words = {
        trace_stage!(STAGE_SELECT);
        WordSelector::new(config).select(sentences)
    };

    let (vocab, encoded) = {
        trace_stage!(STAGE_VOCABULARY);
        let vocab = Vocabulary::from_sentences(&words);
        let encoded = vocab.encode(&words);
        (vocab, encoded)
    };

    let pairs = {
        trace_stage!(STAGE_PAIRS);
        extract_pairs(&encoded, config.window_size, config.pair_dedup)
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        sentences = sentences.len(),
        vocabulary = vocab.len(),
        pairs = pairs.len(),
        "co-occurrence pairs extracted"
    );

    let graph = {
        trace_stage!(STAGE_GRAPH);
        CooccurrenceGraph::build(vocab.len(), &pairs)
    };

    trace_stage!(STAGE_RANK);
    let result = StandardPageRank::new()
        .with_damping(config.damping)
        .with_threshold(config.convergence_threshold)
        .with_max_steps(config.max_steps)
        .run(&graph);

    Ok(Analysis {
        node_weight: NodeWeight::from_scores(&vocab, &result),
        iterations: result.iterations,
        converged: result.converged,
        vocabulary_size: vocab.len(),
        pair_count: pairs.len(),
    })
}

// ============================================================================
// KeywordExtractor — entry point
// ============================================================================

/// Keyword extraction with an injected preprocessor
#[derive(Debug, Clone)]
pub struct KeywordExtractor<P> {
    preprocessor: P,
    config: TextRankConfig,
}

impl<P: Preprocessor> KeywordExtractor<P> {
    /// Create an extractor, rejecting an invalid configuration up front
    pub fn new(preprocessor: P, config: TextRankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            preprocessor,
            config,
        })
    }

    /// Create an extractor with the default configuration
    pub fn with_defaults(preprocessor: P) -> Self {
        Self {
            preprocessor,
            config: TextRankConfig::default(),
        }
    }

    /// The configuration used for every run
    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Score every qualifying word of `text`
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let sentences = {
            trace_stage!(STAGE_PREPROCESS);
            self.preprocessor.annotate(text)?
        };
        analyze_sentences(&sentences, &self.config)
    }

    /// The configured top N keywords of `text`
    pub fn extract(&self, text: &str) -> Result<Vec<RankedKeyword>> {
        Ok(self.analyze(text)?.top_n(self.config.top_n))
    }
}
