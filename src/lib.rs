pub mod config;
pub mod corpus;
pub mod graph;
pub mod pagerank;

pub use graph::Graph;
pub use pagerank::{PageRankError, RankDistribution};
