use std::collections::BTreeMap;

use super::{PageRankError, Result, check_damping};
use crate::graph::Graph;

/// One-step probability of moving to each page of the graph
pub type Distribution = BTreeMap<String, f64>;

/// Probability distribution over the next page a surfer on `page` visits.
///
/// With probability `damping` the surfer follows one of the page's links,
/// otherwise it jumps to any page of the graph. A sink spreads everything
/// uniformly (`1/N` per page). The result covers every page of the graph
/// and sums to 1.
pub fn transition_model(graph: &Graph, page: &str, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    let links = graph
        .links(page)
        .ok_or_else(|| PageRankError::InvalidPage(page.to_string()))?;

    let n = graph.len() as f64;

    if links.is_empty() {
        return Ok(graph.pages().map(|other| (other.to_string(), 1.0 / n)).collect());
    }

    let random_probability = (1.0 - damping) / n;
    let link_probability = damping / links.len() as f64;

    Ok(graph
        .pages()
        .map(|other| {
            let mut probability = random_probability;
            if links.contains(other) {
                probability += link_probability;
            }
            (other.to_string(), probability)
        })
        .collect())
}
