use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log2::{debug, info};
use rand::Rng;
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::seq::SliceRandom;

use super::{PageRankError, RankDistribution, Result, check_damping, transition_model};
use crate::graph::Graph;

/// Estimate PageRank by following a random surfer for `samples` steps,
/// starting on a page chosen uniformly at random.
pub fn sample_rank(graph: &Graph, damping: f64, samples: usize) -> Result<RankDistribution> {
    sample_rank_with_rng(graph, damping, samples, &mut rand::thread_rng())
}

/// Same as [`sample_rank`] but draws from the given rng, so a seeded
/// generator reproduces a run exactly.
///
/// Every visited page is credited before the next one is drawn, the starting
/// page included, so the visit counts add up to `samples`.
pub fn sample_rank_with_rng<R: Rng + ?Sized>(
    graph: &Graph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankDistribution> {
    check_damping(damping)?;
    if samples == 0 {
        return Err(PageRankError::InvalidSampleCount);
    }

    let pages: Vec<&str> = graph.pages().collect();
    let mut page = *pages.choose(rng).ok_or(PageRankError::EmptyGraph)?;
    debug!("Sampling {} steps over {} pages, starting at {}", samples, pages.len(), page);

    let mut visits: HashMap<&str, usize> = pages.iter().map(|page| (*page, 0)).collect();
    // The transition model only depends on the current page, so each page's
    // weights are built once. Indices follow the lexicographic page order.
    let mut next_page: HashMap<&str, WeightedIndex<f64>> = HashMap::new();

    for _ in 0..samples {
        if let Some(count) = visits.get_mut(page) {
            *count += 1;
        }

        let weights = match next_page.entry(page) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let distribution = transition_model(graph, page, damping)?;
                entry.insert(WeightedIndex::new(distribution.values().copied())?)
            }
        };
        page = pages[weights.sample(rng)];
    }

    let ranks: RankDistribution = visits
        .into_iter()
        .map(|(page, count)| (page.to_string(), count as f64 / samples as f64))
        .collect();
    info!("Sampling finished after {} steps", samples);

    Ok(ranks)
}
