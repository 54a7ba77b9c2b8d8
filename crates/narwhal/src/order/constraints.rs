//! Same-layer ordering constraints.
//!
//! An edge with `minlen = 0` may end up with both ends on one rank. Such an edge cannot be
//! drawn between layers; instead it pins its tail to the left of its head inside the layer.

use crate::graphlib::EdgeKey;
use crate::{EdgeLabel, LayoutGraph};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerConstraint {
    pub left: String,
    pub right: String,
}

impl From<&EdgeKey> for LayerConstraint {
    fn from(e: &EdgeKey) -> Self {
        Self {
            left: e.v.clone(),
            right: e.w.clone(),
        }
    }
}

/// Removes every non-loop edge whose ends share a rank and hands it back so the caller can
/// restore it once layout is done.
pub fn take_same_layer_edges(g: &mut LayoutGraph) -> Vec<(EdgeKey, EdgeLabel)> {
    let same_layer: HashSet<EdgeKey> = g
        .edges()
        .filter(|e| !e.is_self_loop())
        .filter(|e| {
            let v_rank = g.node(&e.v).and_then(|n| n.rank);
            v_rank.is_some() && v_rank == g.node(&e.w).and_then(|n| n.rank)
        })
        .cloned()
        .collect();
    if same_layer.is_empty() {
        return Vec::new();
    }
    g.remove_edges_where(|e, _| same_layer.contains(e))
}

/// Reorders `layer` so every constraint holds while staying as close as possible to the given
/// order: a topological sort that always emits the earliest available node.
pub fn apply_constraints(layer: Vec<String>, constraints: &[LayerConstraint]) -> Vec<String> {
    let pos: HashMap<&str, usize> = layer
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), i))
        .collect();

    let mut outs: Vec<Vec<usize>> = vec![Vec::new(); layer.len()];
    let mut indegree: Vec<usize> = vec![0; layer.len()];
    let mut any = false;
    for c in constraints {
        let (Some(&l), Some(&r)) = (pos.get(c.left.as_str()), pos.get(c.right.as_str())) else {
            continue;
        };
        if l == r {
            continue;
        }
        outs[l].push(r);
        indegree[r] += 1;
        any = true;
    }
    if !any {
        return layer;
    }

    let mut ready: BinaryHeap<Reverse<usize>> = indegree
        .iter()
        .enumerate()
        .filter(|(_, d)| **d == 0)
        .map(|(i, _)| Reverse(i))
        .collect();
    let mut emitted: Vec<bool> = vec![false; layer.len()];
    let mut order: Vec<usize> = Vec::with_capacity(layer.len());
    while let Some(Reverse(i)) = ready.pop() {
        emitted[i] = true;
        order.push(i);
        for &j in &outs[i] {
            indegree[j] -= 1;
            if indegree[j] == 0 {
                ready.push(Reverse(j));
            }
        }
    }
    // A constraint cycle leaves nodes behind; keep them in their current order.
    order.extend((0..layer.len()).filter(|i| !emitted[*i]));

    let mut slots: Vec<Option<String>> = layer.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}
