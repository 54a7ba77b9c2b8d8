//! Turns the visible chart into layered-layout edges.
//!
//! Every node's layout parent is the source of its first visible incoming edge. Children of one
//! parent form a sibling group: each distinct role rank in the group gets its own layer, one
//! deeper than the previous, and heavy `minlen = 0` ordering edges chain the siblings by
//! `(rank, id)` so they are laid out left to right (top to bottom when horizontal) in that order.

use crate::config::LayoutConfig;
use crate::rank::RoleRanks;
use crate::visibility::Visible;
use indexmap::IndexMap;
use rustc_hash::FxHashSet as HashSet;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEdgeKind {
    /// A visible edge of the chart, by id.
    Real(String),
    /// A sibling ordering edge; never rendered.
    Ordering,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    /// Unique among all layout edges, used as the multigraph edge name.
    pub name: String,
    pub source: String,
    pub target: String,
    pub minlen: usize,
    pub weight: f64,
    pub kind: LayoutEdgeKind,
}

#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Layout parent per node, in discovery order.
    pub parents: IndexMap<String, String>,
    /// `minlen` of the edges into each grouped child.
    pub minlen: IndexMap<String, usize>,
    pub edges: Vec<LayoutEdge>,
}

impl Constraints {
    pub fn real_edges(&self) -> impl Iterator<Item = &LayoutEdge> {
        self.edges
            .iter()
            .filter(|e| matches!(e.kind, LayoutEdgeKind::Real(_)))
    }

    pub fn ordering_edges(&self) -> impl Iterator<Item = &LayoutEdge> {
        self.edges
            .iter()
            .filter(|e| e.kind == LayoutEdgeKind::Ordering)
    }
}

pub fn build(visible: &Visible<'_>, ranks: &RoleRanks, config: &LayoutConfig) -> Constraints {
    let node_ids: HashSet<&str> = visible.nodes.iter().map(|n| n.id.as_str()).collect();

    let mut usable = Vec::with_capacity(visible.edges.len());
    for edge in &visible.edges {
        if !node_ids.contains(edge.source.as_str()) || !node_ids.contains(edge.target.as_str()) {
            tracing::debug!(
                edge = %edge.id,
                source = %edge.source,
                target = %edge.target,
                "skipping edge with a missing or hidden endpoint"
            );
            continue;
        }
        usable.push(*edge);
    }

    let mut parents: IndexMap<String, String> = IndexMap::new();
    for edge in &usable {
        if edge.source == edge.target {
            continue;
        }
        if parents.contains_key(&edge.target) {
            tracing::debug!(node = %edge.target, ignored = %edge.source, "node has several parents");
            continue;
        }
        parents.insert(edge.target.clone(), edge.source.clone());
    }

    let rank_of: IndexMap<&str, usize> = visible
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), ranks.rank(n)))
        .collect();

    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for (child, parent) in &parents {
        groups
            .entry(parent.as_str())
            .or_default()
            .push(child.as_str());
    }

    let mut minlen: IndexMap<String, usize> = IndexMap::new();
    let mut edges: Vec<LayoutEdge> = Vec::new();
    for (parent, children) in &groups {
        let rank = |id: &str| rank_of.get(id).copied().unwrap_or(ranks.sentinel());

        let distinct: Vec<usize> = children
            .iter()
            .map(|c| rank(*c))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        for child in children {
            let level = distinct.binary_search(&rank(*child)).unwrap_or(0);
            minlen.insert(child.to_string(), level + 1);
        }

        let mut ordered: Vec<&str> = children.clone();
        ordered.sort_by(|a, b| rank(*a).cmp(&rank(*b)).then_with(|| a.cmp(b)));
        for (i, pair) in ordered.windows(2).enumerate() {
            edges.push(LayoutEdge {
                name: format!("order:{parent}:{i}"),
                source: pair[0].to_string(),
                target: pair[1].to_string(),
                minlen: 0,
                weight: config.ordering_weight,
                kind: LayoutEdgeKind::Ordering,
            });
        }
    }

    let mut real: Vec<LayoutEdge> = usable
        .iter()
        .enumerate()
        .map(|(i, edge)| LayoutEdge {
            name: format!("edge:{i}:{}", edge.id),
            source: edge.source.clone(),
            target: edge.target.clone(),
            minlen: minlen.get(&edge.target).copied().unwrap_or(1),
            weight: config.hierarchy_weight,
            kind: LayoutEdgeKind::Real(edge.id.clone()),
        })
        .collect();
    real.append(&mut edges);

    Constraints {
        parents,
        minlen,
        edges: real,
    }
}
