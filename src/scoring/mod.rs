//! Sentence scoring
//!
//! Term weights and the two sentence scorers: frequency-sum and graph
//! centrality.

pub mod centrality;
pub mod frequency;
pub mod weights;

pub use centrality::CentralityScorer;
pub use frequency::FrequencySumScorer;
pub use weights::TermWeightTable;
