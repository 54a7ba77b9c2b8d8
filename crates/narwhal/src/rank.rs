//! Rank assignment.
//!
//! Ranks are assigned by a forward longest-path pass: sources sit on rank 0 and every other node
//! sits on the smallest rank that satisfies `rank(w) >= rank(v) + minlen` for all of its
//! in-edges. This keeps roots of every component on the first layer and treats `minlen` as a hard
//! lower bound.

use crate::LayoutGraph;
use crate::graphlib::EdgeKey;
use rustc_hash::FxHashMap as HashMap;
use std::collections::VecDeque;

pub fn rank(g: &mut LayoutGraph) {
    longest_path(g);
    normalize_ranks(g);
}

/// Assigns ranks in topological (Kahn) order. Expects an acyclic graph; nodes left over by a
/// cycle keep the best rank computed so far instead of failing.
pub fn longest_path(g: &mut LayoutGraph) {
    let ids = g.node_ids();
    let mut indegree: HashMap<String, usize> = ids.iter().map(|v| (v.clone(), 0)).collect();
    for e in g.edges() {
        if e.is_self_loop() {
            continue;
        }
        if let Some(d) = indegree.get_mut(&e.w) {
            *d += 1;
        }
    }

    let mut ranks: HashMap<String, i32> = ids.iter().map(|v| (v.clone(), 0)).collect();
    let mut queue: VecDeque<String> = ids
        .iter()
        .filter(|v| indegree.get(*v).copied().unwrap_or(0) == 0)
        .cloned()
        .collect();
    let mut done: usize = 0;

    loop {
        while let Some(v) = queue.pop_front() {
            done += 1;
            let v_rank = ranks.get(&v).copied().unwrap_or(0);
            for e in g.out_edges(&v, None) {
                if e.is_self_loop() {
                    continue;
                }
                let minlen = g.edge_by_key(&e).map(|l| l.minlen as i32).unwrap_or(1);
                let entry = ranks.entry(e.w.clone()).or_insert(0);
                *entry = (*entry).max(v_rank + minlen);
                if let Some(d) = indegree.get_mut(&e.w) {
                    if *d > 0 {
                        *d -= 1;
                        if *d == 0 {
                            queue.push_back(e.w.clone());
                        }
                    }
                }
            }
        }

        if done >= ids.len() {
            break;
        }
        // Residual cycle: release the first blocked node in insertion order.
        let Some(next) = ids
            .iter()
            .find(|v| indegree.get(*v).copied().unwrap_or(0) > 0)
            .cloned()
        else {
            break;
        };
        indegree.insert(next.clone(), 0);
        queue.push_back(next);
    }

    for (v, r) in ranks {
        if let Some(label) = g.node_mut(&v) {
            label.rank = Some(r);
        }
    }
}

/// Shifts ranks so the smallest one is `0`.
pub fn normalize_ranks(g: &mut LayoutGraph) {
    let min = g
        .nodes()
        .filter_map(|v| g.node(v).and_then(|n| n.rank))
        .min()
        .unwrap_or(0);
    if min == 0 {
        return;
    }
    g.for_each_node_mut(|_id, n| {
        if let Some(r) = n.rank {
            n.rank = Some(r - min);
        }
    });
}

/// How many ranks an edge could shrink by while still honouring its `minlen`.
pub fn slack(g: &LayoutGraph, e: &EdgeKey) -> i32 {
    // Missing nodes/ranks are treated as `0` so callers can degrade gracefully.
    let w_rank = g.node(&e.w).and_then(|n| n.rank).unwrap_or(0);
    let v_rank = g.node(&e.v).and_then(|n| n.rank).unwrap_or(0);
    let minlen: i32 = g.edge_by_key(e).map(|lbl| lbl.minlen as i32).unwrap_or(1);
    w_rank - v_rank - minlen
}
