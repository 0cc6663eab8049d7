//! Frozen adjacency of the sentence graph in compressed sparse row form

use super::builder::GraphBuilder;

/// Sentence graph laid out for the PageRank power iteration
///
/// The edges of node `i` occupy `offsets[i]..offsets[i + 1]` in `targets`
/// and `weights`.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<f64>,
    /// Summed edge weight per node
    strength: Vec<f64>,
}

impl CsrGraph {
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let n = builder.node_count();
        let mut graph = Self {
            offsets: Vec::with_capacity(n + 1),
            targets: Vec::new(),
            weights: Vec::new(),
            strength: Vec::with_capacity(n),
        };
        graph.offsets.push(0);

        for node in 0..n {
            let edges = builder.sorted_edges(node);
            graph.strength.push(edges.iter().map(|&(_, w)| w).sum());
            let (targets, weights): (Vec<u32>, Vec<f64>) = edges.into_iter().unzip();
            graph.targets.extend(targets);
            graph.weights.extend(weights);
            graph.offsets.push(graph.targets.len());
        }
        graph
    }

    pub fn num_nodes(&self) -> usize {
        self.strength.len()
    }

    /// `(target, weight)` pairs of `node`, ordered by target
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let span = self.offsets[node]..self.offsets[node + 1];
        self.targets[span.clone()]
            .iter()
            .zip(&self.weights[span])
            .map(|(&t, &w)| (t as usize, w))
    }

    pub fn node_total_weight(&self, node: usize) -> f64 {
        self.strength[node]
    }

    /// Nodes without a single positive edge
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.num_nodes())
            .filter(|&node| self.offsets[node] == self.offsets[node + 1])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_with_isolate() -> CsrGraph {
        // 0 - 1 - 2, node 3 shares nothing
        let mut builder = GraphBuilder::new(4);
        builder.increment_edge(1, 2, 2.0);
        builder.increment_edge(0, 1, 1.0);
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_neighbors_sorted_by_target() {
        let graph = path_with_isolate();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(0, 1.0), (2, 2.0)]);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![(1, 1.0)]);
    }

    #[test]
    fn test_node_total_weight() {
        let graph = path_with_isolate();
        assert!((graph.node_total_weight(1) - 3.0).abs() < 1e-12);
        assert_eq!(graph.node_total_weight(3), 0.0);
    }

    #[test]
    fn test_dangling_nodes() {
        assert_eq!(path_with_isolate().dangling_nodes(), vec![3]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::from_builder(&GraphBuilder::new(0));
        assert_eq!(graph.num_nodes(), 0);
        assert!(graph.dangling_nodes().is_empty());
    }
}
