//! Sparse co-occurrence graph
//!
//! The graph is a `|V| x |V|` matrix stored in Compressed Sparse Row form:
//! only non-zero cells are kept, sorted by row then column. Construction runs
//! in three steps: raw adjacency from pairs, symmetrization, column
//! normalization. After [`CooccurrenceGraph::build`] every non-zero column
//! sums to 1 and the diagonal is zero.

use super::pairs::CooccurrencePair;

/// A square, non-negative adjacency matrix over vocabulary indices
#[derive(Debug, Clone, PartialEq)]
pub struct CooccurrenceGraph {
    /// Number of nodes (vocabulary size)
    size: usize,
    /// Row pointers: row i's cells are at `row_ptr[i]..row_ptr[i + 1]`
    row_ptr: Vec<usize>,
    /// Column index of each stored cell
    col_idx: Vec<u32>,
    /// Weight of each stored cell
    weights: Vec<f64>,
}

impl Default for CooccurrenceGraph {
    fn default() -> Self {
        Self::zeros(0)
    }
}

impl CooccurrenceGraph {
    /// Create an all-zero graph with `size` nodes
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            row_ptr: vec![0; size + 1],
            col_idx: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Build the normalized graph used for ranking
    pub fn build(vocab_size: usize, pairs: &[CooccurrencePair]) -> Self {
        let mut graph = Self::from_pairs(vocab_size, pairs).symmetrize();
        graph.normalize_columns();
        graph
    }

    /// Raw adjacency: `m[first][second] = 1` for every pair.
    ///
    /// Presence only; a pair seen twice still sets a single cell. Pairs that
    /// reference an index outside the graph are ignored.
    pub fn from_pairs(vocab_size: usize, pairs: &[CooccurrencePair]) -> Self {
        let mut cells: Vec<(u32, u32)> = pairs
            .iter()
            .filter(|p| (p.first as usize) < vocab_size && (p.second as usize) < vocab_size)
            .map(|p| (p.first, p.second))
            .collect();
        cells.sort_unstable();
        cells.dedup();
        Self::from_sorted_cells(vocab_size, cells.into_iter().map(|(i, j)| (i, j, 1.0)))
    }

    /// `m + mᵀ - diag(m)`, with the diagonal then forced to zero.
    ///
    /// An edge recorded in one direction becomes mutual with weight 1; an
    /// edge recorded in both directions gets weight 2.
    pub fn symmetrize(&self) -> Self {
        let mut cells: Vec<(u32, u32, f64)> = Vec::with_capacity(self.weights.len() * 2);
        for (i, j, w) in self.cells() {
            if i != j {
                cells.push((i, j, w));
                cells.push((j, i, w));
            }
        }
        cells.sort_unstable_by_key(|&(i, j, _)| (i, j));

        let mut merged: Vec<(u32, u32, f64)> = Vec::with_capacity(cells.len());
        for (i, j, w) in cells {
            match merged.last_mut() {
                Some(last) if (last.0, last.1) == (i, j) => last.2 += w,
                _ => merged.push((i, j, w)),
            }
        }
        Self::from_sorted_cells(self.size, merged.into_iter())
    }

    /// Divide each column by its sum. All-zero columns stay zero.
    pub fn normalize_columns(&mut self) {
        let sums = self.column_sums();
        for (col, weight) in self.col_idx.iter().zip(self.weights.iter_mut()) {
            let sum = sums[*col as usize];
            if sum != 0.0 {
                *weight /= sum;
            }
        }
    }

    /// Assemble from cells already sorted by `(row, col)` without duplicates
    fn from_sorted_cells(size: usize, cells: impl Iterator<Item = (u32, u32, f64)>) -> Self {
        let mut graph = Self::zeros(size);
        let mut row = 0usize;
        for (i, j, w) in cells {
            let i = i as usize;
            while row < i {
                row += 1;
                graph.row_ptr[row] = graph.col_idx.len();
            }
            graph.col_idx.push(j);
            graph.weights.push(w);
        }
        while row < size {
            row += 1;
            graph.row_ptr[row] = graph.col_idx.len();
        }
        graph
    }

    /// Column sums accumulated in row order
    fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.size];
        for (col, weight) in self.col_idx.iter().zip(&self.weights) {
            sums[*col as usize] += weight;
        }
        sums
    }

    /// Every stored cell as `(row, col, weight)`, row-major
    fn cells(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        (0..self.size).flat_map(move |i| {
            self.neighbors(i).map(move |(j, w)| (i as u32, j, w))
        })
    }

    /// Get the number of nodes
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of stored (non-zero) cells
    pub fn nonzero_count(&self) -> usize {
        self.weights.len()
    }

    /// Weight of the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.size || col >= self.size {
            return 0.0;
        }
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        match self.col_idx[start..end].binary_search(&(col as u32)) {
            Ok(k) => self.weights[start + k],
            Err(_) => 0.0,
        }
    }

    /// Non-zero cells of one row as `(col, weight)`, in column order
    pub fn neighbors(&self, row: usize) -> impl Iterator<Item = (u32, f64)> + '_ {
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        self.col_idx[start..end]
            .iter()
            .copied()
            .zip(self.weights[start..end].iter().copied())
    }

    /// Sum of one column
    pub fn column_sum(&self, col: usize) -> f64 {
        self.col_idx
            .iter()
            .zip(&self.weights)
            .filter(|(c, _)| **c as usize == col)
            .map(|(_, w)| w)
            .sum()
    }

    /// A node with no co-occurrence partner has an all-zero column
    pub fn is_isolated(&self, node: usize) -> bool {
        self.col_idx
            .iter()
            .zip(&self.weights)
            .all(|(c, w)| *c as usize != node || *w == 0.0)
    }

    /// Number of undirected edges (non-zero cells above the diagonal)
    pub fn edge_count(&self) -> usize {
        self.cells()
            .filter(|&(i, j, _)| match i.cmp(&j) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => self.get(j as usize, i as usize) == 0.0,
                std::cmp::Ordering::Equal => false,
            })
            .count()
    }

    /// Check `m[i][j] == m[j][i]` for every cell
    pub fn is_symmetric(&self) -> bool {
        self.cells()
            .all(|(i, j, w)| self.get(j as usize, i as usize) == w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(u32, u32)]) -> Vec<CooccurrencePair> {
        raw.iter().map(|&(a, b)| CooccurrencePair::new(a, b)).collect()
    }

    #[test]
    fn test_raw_adjacency_is_directed() {
        let graph = CooccurrenceGraph::from_pairs(3, &pairs(&[(0, 1), (1, 2)]));
        assert_eq!(graph.get(0, 1), 1.0);
        assert_eq!(graph.get(1, 0), 0.0);
        assert_eq!(graph.get(1, 2), 1.0);
    }

    #[test]
    fn test_raw_adjacency_is_presence_only() {
        let graph = CooccurrenceGraph::from_pairs(2, &pairs(&[(0, 1), (0, 1)]));
        assert_eq!(graph.get(0, 1), 1.0);
        assert_eq!(graph.nonzero_count(), 1);
    }

    #[test]
    fn test_symmetrize() {
        let graph = CooccurrenceGraph::from_pairs(3, &pairs(&[(0, 1), (1, 2)])).symmetrize();
        assert!(graph.is_symmetric());
        assert_eq!(graph.get(0, 1), 1.0);
        assert_eq!(graph.get(1, 0), 1.0);
        assert_eq!(graph.get(2, 1), 1.0);
        assert_eq!(graph.get(0, 2), 0.0);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_symmetrize_double_recorded_edge() {
        let graph = CooccurrenceGraph::from_pairs(2, &pairs(&[(0, 1), (1, 0)])).symmetrize();
        assert_eq!(graph.get(0, 1), 2.0);
        assert_eq!(graph.get(1, 0), 2.0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_diagonal_is_zeroed() {
        let graph = CooccurrenceGraph::from_pairs(2, &pairs(&[(0, 0), (0, 1)])).symmetrize();
        assert_eq!(graph.get(0, 0), 0.0);
        assert_eq!(graph.get(0, 1), 1.0);
    }

    #[test]
    fn test_normalized_columns() {
        let graph = CooccurrenceGraph::build(3, &pairs(&[(0, 1), (1, 2)]));

        // beta (1) links to alpha and gamma equally
        assert!((graph.get(0, 1) - 0.5).abs() < 1e-12);
        assert!((graph.get(2, 1) - 0.5).abs() < 1e-12);
        // alpha and gamma each point only at beta
        assert!((graph.get(1, 0) - 1.0).abs() < 1e-12);
        assert!((graph.get(1, 2) - 1.0).abs() < 1e-12);

        for col in 0..3 {
            assert!((graph.column_sum(col) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_isolated_column_stays_zero() {
        let graph = CooccurrenceGraph::build(3, &pairs(&[(0, 1)]));
        assert!(graph.is_isolated(2));
        assert_eq!(graph.column_sum(2), 0.0);
        assert!(!graph.is_isolated(0));
    }

    #[test]
    fn test_out_of_range_pairs_ignored() {
        let graph = CooccurrenceGraph::build(2, &pairs(&[(0, 5), (0, 1)]));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CooccurrenceGraph::build(0, &[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_symmetric());
        assert_eq!(graph, CooccurrenceGraph::default());
    }

    #[test]
    fn test_neighbors_in_column_order() {
        let graph = CooccurrenceGraph::build(3, &pairs(&[(1, 2), (0, 1)]));
        let row: Vec<_> = graph.neighbors(1).collect();
        assert_eq!(row, vec![(0, 1.0), (2, 1.0)]);
        assert_eq!(graph.neighbors(0).count(), 1);
    }

    #[test]
    fn test_storage_scales_with_edges() {
        // A chain over a vocabulary far too large for a dense matrix
        let n = 200_000u32;
        let chain: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let graph = CooccurrenceGraph::build(n as usize, &pairs(&chain));

        assert_eq!(graph.size(), n as usize);
        assert_eq!(graph.nonzero_count(), 2 * (n as usize - 1));
        assert_eq!(graph.edge_count(), n as usize - 1);
        assert!((graph.get(1, 0) - 1.0).abs() < 1e-12);
        assert!((graph.get(0, 1) - 0.5).abs() < 1e-12);
    }
}
