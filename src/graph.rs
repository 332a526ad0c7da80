use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Link structure of a corpus: every page mapped to the set of pages it links to.
///
/// Built once and read-only afterwards. Links never point at the page itself
/// and never leave the page set. Pages are kept sorted so every traversal
/// (and therefore every printed report) comes out in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl Graph {
    /// Builds a graph from raw page -> links pairs, dropping self links and
    /// links to pages that are not part of the input.
    pub fn from_links<I, L>(raw: I) -> Self
    where
        I: IntoIterator<Item = (String, L)>,
        L: IntoIterator<Item = String>,
    {
        let raw: Vec<(String, BTreeSet<String>)> = raw
            .into_iter()
            .map(|(page, links)| (page, links.into_iter().collect()))
            .collect();
        let known: BTreeSet<&str> = raw.iter().map(|(page, _)| page.as_str()).collect();

        let mut links: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in &raw {
            let kept: BTreeSet<String> = targets
                .iter()
                .filter(|target| *target != page && known.contains(target.as_str()))
                .cloned()
                .collect();
            links.entry(page.clone()).or_default().extend(kept);
        }

        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Page identifiers in lexicographic order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Outgoing links of `page`, `None` if the page is not in the graph
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    /// A sink has no outgoing links and behaves as if it linked to every page.
    pub fn is_sink(&self, page: &str) -> bool {
        self.links.get(page).is_some_and(BTreeSet::is_empty)
    }

    pub fn sinks(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.links.iter().map(|(page, targets)| (page.as_str(), targets))
    }

    /// Renders the graph in Graphviz DOT format
    pub fn to_dot(&self) -> String {
        let mut graph: DiGraph<&str, ()> = DiGraph::new();
        let nodes: HashMap<&str, NodeIndex> =
            self.pages().map(|page| (page, graph.add_node(page))).collect();

        for (page, targets) in self.iter() {
            for target in targets {
                graph.add_edge(nodes[page], nodes[target.as_str()], ());
            }
        }

        format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}
