use proptest::prelude::*;

use crate::graph::Graph;

/// Random graph over `1..8` pages named `0.html`..; each page links to the
/// pages selected by its bitmask.
pub(crate) fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec(0u32..(1 << n), n).prop_map(move |masks| {
            Graph::from_links(masks.into_iter().enumerate().map(|(i, mask)| {
                let links: Vec<String> = (0..n)
                    .filter(|j| mask & (1 << j) != 0)
                    .map(|j| format!("{}.html", j))
                    .collect();
                (format!("{}.html", i), links)
            }))
        })
    })
}
