//! PageRank estimators over a corpus [`Graph`](crate::graph::Graph).
//!
//! Two independent estimators share the same random-surfer model:
//! - [`sample_rank`] walks the graph following [`transition_model`] and
//!   reports visit frequencies.
//! - [`iterate_rank`] repeats the synchronous PageRank update until no page
//!   moves by more than the threshold.

pub mod config;
pub mod iterative;
pub mod sampling;
pub mod transition;

#[cfg(test)]
pub(crate) mod strategies;

use std::collections::BTreeMap;

pub use config::{EstimatorMode, RankConfig};
pub use iterative::{iterate_rank, iterate_rank_with, iterate_round};
pub use sampling::{sample_rank, sample_rank_with_rng};
pub use transition::{Distribution, transition_model};

/// Probability of following a link instead of teleporting
pub const DAMPING: f64 = 0.85;
/// Number of surfer steps taken by the sampling estimator
pub const SAMPLES: usize = 10000;
/// Largest per-page change still counted as converged
pub const THRESHOLD: f64 = 0.001;
/// Upper bound on update rounds of the iterative estimator
pub const MAX_ROUNDS: usize = 1000;

/// Errors raised by the estimators. Input problems are reported before any
/// work is done; no estimator ever returns a partial distribution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PageRankError {
    #[error("page not found in graph: {0}")]
    InvalidPage(String),
    #[error("damping factor must be in (0, 1], got {0}")]
    InvalidDamping(f64),
    #[error("graph has no pages")]
    EmptyGraph,
    #[error("sample count must be greater than 0")]
    InvalidSampleCount,
    #[error("ranks did not converge after {rounds} rounds (last delta {delta})")]
    Convergence { rounds: usize, delta: f64 },
    #[error("cannot draw next page: {0}")]
    Sampling(#[from] rand::distributions::WeightedError),
}

pub type Result<T> = std::result::Result<T, PageRankError>;

/// Checks that `damping` lies in (0, 1]
pub fn check_damping(damping: f64) -> Result<()> {
    // NaN fails both comparisons
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(PageRankError::InvalidDamping(damping))
    }
}

/// Final page -> rank snapshot produced by an estimator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankDistribution {
    ranks: BTreeMap<String, f64>,
}

impl RankDistribution {
    pub fn rank(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    /// Pages with their rank, in lexicographic page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(page, rank)| (page.as_str(), *rank))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Sum of all ranks; 1.0 for a finished distribution
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// The `n` highest ranked pages, ties broken by page name
    pub fn top(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Largest absolute per-page difference to `other`. Pages missing from
    /// either side count with rank 0.
    pub fn max_delta(&self, other: &RankDistribution) -> f64 {
        self.ranks
            .keys()
            .chain(other.ranks.keys())
            .map(|page| {
                let a = self.rank(page).unwrap_or(0.0);
                let b = other.rank(page).unwrap_or(0.0);
                (a - b).abs()
            })
            .fold(0.0, f64::max)
    }
}

impl FromIterator<(String, f64)> for RankDistribution {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

/// Print ranks rounded to 4 decimal places, one page per line
pub fn print_ranks(title: &str, ranks: &RankDistribution) {
    println!("{}", title);
    for (page, rank) in ranks.iter() {
        println!("  {}: {:.4}", page, rank);
    }
}
