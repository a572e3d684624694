//! Standard damped power iteration
//!
//! Every score starts at 1. Each step computes
//! `new[i] = (1 - d) + d * Σ_j graph[i][j] * score[j]` and stops once the
//! total score mass changes by less than the threshold, or when the step
//! budget is spent. Scores are not normalized: an isolated word keeps the
//! floor `1 - d`.

use super::PageRankResult;
use crate::graph::builder::CooccurrenceGraph;
use rayon::prelude::*;

/// Graphs with at least this many nodes compute rows in parallel
const PARALLEL_THRESHOLD: usize = 512;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of propagation steps
    pub max_steps: usize,
    /// Convergence threshold on the change of total score
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_steps: 10,
            threshold: 1e-5,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum number of steps
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run the iteration on a normalized graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CooccurrenceGraph) -> PageRankResult {
        let n = graph.size();
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];
        let mut previous_total = 0.0;
        let mut iterations = 0;
        let mut delta = f64::MAX;
        let mut converged = false;

        while iterations < self.max_steps {
            iterations += 1;

            if n >= PARALLEL_THRESHOLD {
                new_scores
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(i, slot)| *slot = self.propagate(graph.neighbors(i), &scores));
            } else {
                for (i, slot) in new_scores.iter_mut().enumerate() {
                    *slot = self.propagate(graph.neighbors(i), &scores);
                }
            }

            std::mem::swap(&mut scores, &mut new_scores);

            let total: f64 = scores.iter().sum();
            delta = (total - previous_total).abs();
            if delta < self.threshold {
                converged = true;
                break;
            }
            previous_total = total;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = n, iterations, delta, converged, "score propagation finished");

        PageRankResult::new(scores, iterations, delta, converged)
    }

    /// One row of the update: `(1 - d) + d * <row, scores>` over the row's
    /// non-zero cells
    #[inline]
    fn propagate(&self, row: impl Iterator<Item = (u32, f64)>, scores: &[f64]) -> f64 {
        let incoming: f64 = row.map(|(j, w)| w * scores[j as usize]).sum();
        (1.0 - self.damping) + self.damping * incoming
    }
}
