//! Standard PageRank algorithm
//!
//! Implements the classic PageRank with power iteration and proper
//! handling of dangling nodes.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::SummarizerConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take damping, iteration cap and threshold from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Power-iterate until the L1 change drops to `threshold` or the
    /// iteration cap is hit
    ///
    /// A capped run still returns its scores, with `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes();
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0, true);
        }

        let dangling = graph.dangling_nodes();
        let mut rank = vec![1.0 / n as f64; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            let next = self.step(graph, &rank, &dangling);
            delta = rank.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            rank = next;
            iterations += 1;
        }

        let total: f64 = rank.iter().sum();
        if total > 0.0 {
            rank.iter_mut().for_each(|r| *r /= total);
        }
        PageRankResult::new(rank, iterations, delta, delta <= self.threshold)
    }

    /// One iteration; rank held by dangling nodes is spread over all nodes
    fn step(&self, graph: &CsrGraph, rank: &[f64], dangling: &[usize]) -> Vec<f64> {
        let leaked: f64 = dangling.iter().map(|&node| rank[node]).sum();
        let base = (1.0 - self.damping + self.damping * leaked) / rank.len() as f64;
        let mut next = vec![base; rank.len()];

        for (node, &mass) in rank.iter().enumerate() {
            let strength = graph.node_total_weight(node);
            if strength <= 0.0 {
                continue;
            }
            let share = self.damping * mass / strength;
            for (target, weight) in graph.neighbors(node) {
                next[target] += share * weight;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_triangle_graph() -> CsrGraph {
        let mut builder = GraphBuilder::new(3);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(1, 2, 1.0);
        builder.increment_edge(2, 0, 1.0);
        CsrGraph::from_builder(&builder)
    }

    fn build_star_graph() -> CsrGraph {
        // Sentence 0 shares terms with three others that share nothing
        let mut builder = GraphBuilder::new(4);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(0, 2, 1.0);
        builder.increment_edge(0, 3, 1.0);
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let graph = build_triangle_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_heavier_edges_attract_more_rank() {
        let mut builder = GraphBuilder::new(3);
        builder.increment_edge(0, 1, 3.0);
        builder.increment_edge(0, 2, 0.5);
        let graph = CsrGraph::from_builder(&builder);

        let result = StandardPageRank::new().run(&graph);
        assert!(result.scores[1] > result.scores[2]);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let graph = build_triangle_graph();
        let result = StandardPageRank::new().run(&graph);

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dangling_sentence_keeps_rank() {
        let mut builder = GraphBuilder::new(3);
        builder.increment_edge(0, 1, 1.0);
        let graph = CsrGraph::from_builder(&builder);

        let result = StandardPageRank::new().run(&graph);
        assert!(result.converged);
        assert!(result.scores[2] > 0.0);
        assert!((result.scores[0] - result.scores[1]).abs() < 1e-9);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::from_builder(&GraphBuilder::new(0));
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let graph = build_star_graph();
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();

        // Lower damping = more teleportation = more uniform scores
        let result_low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&graph);

        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_from_config() {
        let config = SummarizerConfig::default()
            .with_damping(0.7)
            .with_max_iterations(25)
            .with_convergence_threshold(1e-4);
        let pr = StandardPageRank::from_config(&config);

        assert_eq!(pr.damping, 0.7);
        assert_eq!(pr.max_iterations, 25);
        assert_eq!(pr.threshold, 1e-4);
    }
}
