//! Normalize long edges by inserting dummy nodes.
//!
//! After ranking, an edge may span several ranks. Ordering and positioning only reason about
//! rank-adjacent edges, so each long edge is replaced by a chain of zero-size dummy nodes, one
//! per intermediate rank. [`undo`] removes the chains and restores the original edges.

use crate::graphlib::EdgeKey;
use crate::{EdgeLabel, LayoutGraph, NodeLabel};
use rustc_hash::FxHashSet as HashSet;

/// A long edge that was replaced by a dummy chain.
#[derive(Debug, Clone)]
pub struct DummyChain {
    pub edge: EdgeKey,
    pub label: EdgeLabel,
    pub dummies: Vec<String>,
}

fn add_dummy_node(g: &mut LayoutGraph, label: NodeLabel, prefix: &str) -> String {
    let mut i = g.node_count();
    loop {
        let v = format!("{prefix}{i}");
        if !g.has_node(&v) {
            g.set_node(v.clone(), label);
            return v;
        }
        i += 1;
    }
}

fn rank_of(g: &LayoutGraph, v: &str) -> i32 {
    g.node(v).and_then(|n| n.rank).unwrap_or(0)
}

pub fn run(g: &mut LayoutGraph) -> Vec<DummyChain> {
    let long: HashSet<EdgeKey> = g
        .edges()
        .filter(|e| rank_of(g, &e.w) - rank_of(g, &e.v) > 1)
        .cloned()
        .collect();
    if long.is_empty() {
        return Vec::new();
    }
    g.remove_edges_where(|e, _| long.contains(e))
        .into_iter()
        .map(|(e, label)| normalize_edge(g, e, label))
        .collect()
}

fn normalize_edge(g: &mut LayoutGraph, e: EdgeKey, label: EdgeLabel) -> DummyChain {
    let v_rank = rank_of(g, &e.v);
    let w_rank = rank_of(g, &e.w);

    let link = EdgeLabel {
        minlen: 1,
        weight: label.weight,
        ..Default::default()
    };

    let mut dummies = Vec::new();
    let mut prev = e.v.clone();
    for r in (v_rank + 1)..w_rank {
        let dummy = add_dummy_node(
            g,
            NodeLabel {
                rank: Some(r),
                dummy: true,
                edge_obj: Some(e.clone()),
                ..Default::default()
            },
            "_d",
        );
        g.set_edge_with_label(prev, dummy.clone(), link.clone());
        dummies.push(dummy.clone());
        prev = dummy;
    }
    g.set_edge_with_label(prev, e.w.clone(), link);

    DummyChain {
        edge: e,
        label,
        dummies,
    }
}

pub fn undo(g: &mut LayoutGraph, chains: Vec<DummyChain>) {
    let dummies: HashSet<&str> = chains
        .iter()
        .flat_map(|c| c.dummies.iter().map(String::as_str))
        .collect();
    g.remove_nodes_where(|v, _| dummies.contains(v));
    for chain in chains {
        g.set_edge_key(chain.edge, chain.label);
    }
}
