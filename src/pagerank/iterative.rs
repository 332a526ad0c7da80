use std::collections::BTreeMap;

use log2::{debug, info, warn};

use super::{MAX_ROUNDS, PageRankError, RankDistribution, Result, THRESHOLD, check_damping};
use crate::graph::Graph;

/// Compute PageRank by repeated synchronous updates, starting from `1/N`
/// everywhere, until no page changes by more than [`THRESHOLD`].
///
/// Gives up with [`PageRankError::Convergence`] after [`MAX_ROUNDS`] rounds.
pub fn iterate_rank(graph: &Graph, damping: f64) -> Result<RankDistribution> {
    iterate_rank_with(graph, damping, THRESHOLD, MAX_ROUNDS)
}

/// [`iterate_rank`] with an explicit convergence threshold and round cap
pub fn iterate_rank_with(
    graph: &Graph,
    damping: f64,
    threshold: f64,
    max_rounds: usize,
) -> Result<RankDistribution> {
    check_damping(damping)?;
    if graph.is_empty() {
        return Err(PageRankError::EmptyGraph);
    }

    let n = graph.len() as f64;
    let mut ranks: RankDistribution = graph.pages().map(|page| (page.to_string(), 1.0 / n)).collect();
    let mut delta = f64::INFINITY;

    for round in 1..=max_rounds {
        let next = iterate_round(graph, damping, &ranks)?;
        delta = next.max_delta(&ranks);
        ranks = next;
        debug!("Round {}: largest rank change {}", round, delta);

        if delta <= threshold {
            info!("Ranks converged after {} rounds", round);
            return Ok(ranks);
        }
    }

    warn!("Ranks still moving by {} after {} rounds", delta, max_rounds);
    Err(PageRankError::Convergence {
        rounds: max_rounds,
        delta,
    })
}

/// One synchronous PageRank update:
///
/// ```text
/// PR'(p) = (1 - d) / N
///        + d * Σ PR(q) / |links(q)|   for every q linking to p
///        + d * Σ PR(s) / N            for every sink s
/// ```
///
/// Every new value is computed from the same `ranks` snapshot. Pages absent
/// from `ranks` start at 0.
pub fn iterate_round(graph: &Graph, damping: f64, ranks: &RankDistribution) -> Result<RankDistribution> {
    check_damping(damping)?;
    if graph.is_empty() {
        return Err(PageRankError::EmptyGraph);
    }

    let n = graph.len() as f64;
    let rank_of = |page: &str| ranks.rank(page).unwrap_or(0.0);

    // Sinks behave as if they linked to every page, themselves included.
    let sink_mass: f64 = graph.sinks().map(rank_of).sum();
    let base = (1.0 - damping) / n + damping * sink_mass / n;

    let mut next: BTreeMap<&str, f64> = graph.pages().map(|page| (page, base)).collect();
    for (page, links) in graph.iter() {
        if links.is_empty() {
            continue;
        }
        let share = damping * rank_of(page) / links.len() as f64;
        for target in links {
            if let Some(rank) = next.get_mut(target.as_str()) {
                *rank += share;
            }
        }
    }

    Ok(next
        .into_iter()
        .map(|(page, rank)| (page.to_string(), rank))
        .collect())
}
