use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::{
    DAMPING, MAX_ROUNDS, RankDistribution, Result, SAMPLES, THRESHOLD, iterate_rank_with,
    sample_rank, sample_rank_with_rng,
};
use crate::graph::Graph;

/// Which estimators to run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EstimatorMode {
    Sample,
    Iterate,
    Both,
}

impl EstimatorMode {
    pub fn samples(self) -> bool {
        matches!(self, EstimatorMode::Sample | EstimatorMode::Both)
    }

    pub fn iterates(self) -> bool {
        matches!(self, EstimatorMode::Iterate | EstimatorMode::Both)
    }
}

/// Parameters of one ranking run
#[derive(Debug, Clone)]
pub struct RankConfig {
    pub damping: f64,
    pub samples: usize,
    pub threshold: f64,
    pub max_rounds: usize,
    /// Fixed seed for the sampler, `None` draws from the thread rng
    pub seed: Option<u64>,
    pub mode: EstimatorMode,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
            threshold: THRESHOLD,
            max_rounds: MAX_ROUNDS,
            seed: None,
            mode: EstimatorMode::Both,
        }
    }
}

impl RankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_mode(mut self, mode: EstimatorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Runs the sampling estimator with this configuration
    pub fn sample(&self, graph: &Graph) -> Result<RankDistribution> {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                sample_rank_with_rng(graph, self.damping, self.samples, &mut rng)
            }
            None => sample_rank(graph, self.damping, self.samples),
        }
    }

    /// Runs the iterative estimator with this configuration
    pub fn iterate(&self, graph: &Graph) -> Result<RankDistribution> {
        iterate_rank_with(graph, self.damping, self.threshold, self.max_rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagerank::PageRankError;

    fn pair() -> Graph {
        Graph::from_links([
            ("a.html".to_string(), vec!["b.html".to_string()]),
            ("b.html".to_string(), vec!["a.html".to_string()]),
        ])
    }

    #[test]
    fn test_defaults() {
        let cfg = RankConfig::new();
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.samples, 10000);
        assert_eq!(cfg.threshold, 0.001);
        assert_eq!(cfg.mode, EstimatorMode::Both);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let cfg = RankConfig::new().with_samples(500).with_seed(7);
        let first = cfg.sample(&pair()).unwrap();
        let second = cfg.sample(&pair()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mode_flags() {
        assert!(EstimatorMode::Both.samples() && EstimatorMode::Both.iterates());
        assert!(EstimatorMode::Sample.samples() && !EstimatorMode::Sample.iterates());
        assert!(!EstimatorMode::Iterate.samples() && EstimatorMode::Iterate.iterates());
    }

    #[test]
    fn test_iterate_respects_round_cap() {
        let graph = Graph::from_links([
            ("a.html".to_string(), vec!["b.html".to_string()]),
            ("b.html".to_string(), vec![]),
        ]);
        let cfg = RankConfig::new().with_threshold(1e-12).with_max_rounds(1);
        match cfg.iterate(&graph) {
            Err(PageRankError::Convergence { rounds, delta }) => {
                assert_eq!(rounds, 1);
                assert!((delta - 0.2125).abs() < 1e-9);
            }
            other => panic!("expected convergence error, got {:?}", other),
        }
    }
}
