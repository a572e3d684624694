//! Score propagation
//!
//! Damped power iteration over the normalized co-occurrence graph.

pub mod standard;

/// Result of a score propagation run
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by vocabulary index)
    pub scores: Vec<f64>,
    /// Number of propagation steps performed
    pub iterations: usize,
    /// Change in total score mass at the last step
    pub delta: f64,
    /// Whether the convergence test fired before the step budget ran out
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}
