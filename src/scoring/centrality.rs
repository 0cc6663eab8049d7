//! TextRank centrality scoring over the sentence-similarity graph

use crate::graph::csr::CsrGraph;
use crate::graph::similarity::build_similarity_graph;
use crate::pagerank::standard::StandardPageRank;
use crate::pipeline::artifacts::{SentenceScores, TermStream};
use crate::pipeline::traits::SentenceScorer;
use crate::types::SummarizerConfig;

/// Scores sentences by weighted PageRank on their similarity graph
///
/// Graphs with fewer than two sentences or without a single positive edge
/// skip PageRank and give every sentence `1/n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralityScorer;

impl SentenceScorer for CentralityScorer {
    fn score(&self, terms: &TermStream, cfg: &SummarizerConfig) -> SentenceScores {
        let n = terms.num_sentences();
        if n < 2 {
            return SentenceScores::uniform(n);
        }

        let builder = build_similarity_graph(terms.sentences(), cfg.similarity);
        if builder.edge_count() == 0 {
            return SentenceScores::uniform(n);
        }

        let graph = CsrGraph::from_builder(&builder);
        let result = StandardPageRank::from_config(cfg).run(&graph);

        SentenceScores {
            scores: result.scores,
            iterations: result.iterations,
            converged: result.converged,
            delta: result.delta,
            degenerate: false,
        }
    }
}
