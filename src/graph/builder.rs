//! Mutable sentence graph used while computing pairwise similarities
//!
//! Node `k` is the `k`-th eligible sentence. Edges are undirected and kept
//! in an FxHashMap per node so repeated increments stay O(1).

use rustc_hash::FxHashMap;

/// Undirected weighted graph over a fixed set of sentence nodes
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: Vec<FxHashMap<u32, f64>>,
}

impl GraphBuilder {
    /// Graph with `node_count` isolated nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![FxHashMap::default(); node_count],
        }
    }

    /// Add `weight` to the edge between two nodes, creating it if needed
    ///
    /// Self-loops, unknown nodes and non-positive weights are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        let (a, b) = (from as usize, to as usize);
        if a == b || !(weight > 0.0) || a >= self.adjacency.len() || b >= self.adjacency.len() {
            return;
        }
        *self.adjacency[a].entry(to).or_insert(0.0) += weight;
        *self.adjacency[b].entry(from).or_insert(0.0) += weight;
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum::<usize>() / 2
    }

    /// Edge weight between two nodes, if connected
    pub fn edge_weight(&self, from: u32, to: u32) -> Option<f64> {
        self.adjacency.get(from as usize)?.get(&to).copied()
    }

    /// Neighbors of `node` ordered by node id
    pub fn sorted_edges(&self, node: usize) -> Vec<(u32, f64)> {
        let mut edges: Vec<(u32, f64)> = self.adjacency[node]
            .iter()
            .map(|(&target, &weight)| (target, weight))
            .collect();
        edges.sort_unstable_by_key(|&(target, _)| target);
        edges
    }
}
