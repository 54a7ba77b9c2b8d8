//! Break cycles by reversing a feedback arc set (FAS).
//!
//! The FAS is found with a depth-first search that starts from every node in insertion order;
//! an edge pointing back into the current DFS stack is a back edge. Reversed edges are tagged so
//! [`undo`] can restore their original direction and name.

use crate::LayoutGraph;
use crate::graphlib::EdgeKey;
use rustc_hash::FxHashSet as HashSet;

pub fn run(g: &mut LayoutGraph) {
    let fas: HashSet<EdgeKey> = dfs_fas(g).into_iter().collect();
    if fas.is_empty() {
        return;
    }
    tracing::debug!(reversed = fas.len(), "breaking cycles");

    for (e, mut label) in g.remove_edges_where(|e, _| fas.contains(e)) {
        label.forward_name = e.name;
        label.reversed = true;

        let name = unique_rev_name(g, &e.w, &e.v);
        g.set_edge_named(e.w, e.v, Some(name), Some(label));
    }
}

pub fn undo(g: &mut LayoutGraph) {
    for (e, mut label) in g.remove_edges_where(|_, label| label.reversed) {
        let forward_name = label.forward_name.take();
        label.reversed = false;
        g.set_edge_named(e.w, e.v, forward_name, Some(label));
    }
}

fn unique_rev_name(g: &LayoutGraph, v: &str, w: &str) -> String {
    let mut i = 1usize;
    loop {
        let candidate = format!("rev{i}");
        if !g.has_edge(v, w, Some(&candidate)) {
            return candidate;
        }
        i += 1;
    }
}

/// Depth-first search from every node in insertion order; an out-edge into a node still on the
/// walk is a back edge. Uses an explicit frame stack so deep hierarchies cannot overflow.
fn dfs_fas(g: &LayoutGraph) -> Vec<EdgeKey> {
    let mut fas: Vec<EdgeKey> = Vec::new();
    let mut visited: HashSet<String> = HashSet::default();
    let mut on_path: HashSet<String> = HashSet::default();
    // (node, its out-edges, next out-edge to look at)
    let mut frames: Vec<(String, Vec<EdgeKey>, usize)> = Vec::new();

    for root in g.nodes() {
        if !visited.insert(root.to_string()) {
            continue;
        }
        on_path.insert(root.to_string());
        frames.push((root.to_string(), g.out_edges(root, None), 0));

        while let Some((_, edges, next)) = frames.last_mut() {
            let Some(e) = edges.get(*next).cloned() else {
                if let Some((v, _, _)) = frames.pop() {
                    on_path.remove(&v);
                }
                continue;
            };
            *next += 1;
            if e.is_self_loop() {
                continue;
            }
            if on_path.contains(&e.w) {
                fas.push(e);
            } else if visited.insert(e.w.clone()) {
                on_path.insert(e.w.clone());
                let out = g.out_edges(&e.w, None);
                frames.push((e.w, out, 0));
            }
        }
    }
    fas
}
