use crate::LayoutGraph;
use rustc_hash::FxHashSet as HashSet;

/// Builds the initial layering with a depth-first walk that starts from nodes sorted by
/// `(rank, insertion index)`. Nodes reached from the same parent end up next to each other.
pub fn init_order(g: &LayoutGraph) -> Vec<Vec<String>> {
    let ids = g.node_ids();
    let Some(max_rank) = ids
        .iter()
        .filter_map(|v| g.node(v).and_then(|n| n.rank))
        .max()
    else {
        return Vec::new();
    };

    let mut layers: Vec<Vec<String>> = vec![Vec::new(); (max_rank.max(0) + 1) as usize];
    let mut visited: HashSet<String> = HashSet::default();

    // `sort_by_key` is stable, so equal ranks keep insertion order.
    let mut ordered: Vec<&String> = ids.iter().collect();
    ordered.sort_by_key(|v| g.node(v).and_then(|n| n.rank).unwrap_or(i32::MAX));
    // Preorder walk with an explicit stack of (node, successors, next successor).
    let mut frames: Vec<(&str, Vec<&str>, usize)> = Vec::new();
    for root in ordered {
        if !visit(g, root, &mut visited, &mut layers) {
            continue;
        }
        frames.push((root.as_str(), g.successors(root), 0));
        while let Some((_, succ, next)) = frames.last_mut() {
            let Some(&w) = succ.get(*next) else {
                frames.pop();
                continue;
            };
            *next += 1;
            if visit(g, w, &mut visited, &mut layers) {
                frames.push((w, g.successors(w), 0));
            }
        }
    }

    layers
}

/// Marks `v` visited and appends it to its layer. Returns whether its successors should be
/// walked: `false` when `v` was already seen or has no rank.
fn visit(
    g: &LayoutGraph,
    v: &str,
    visited: &mut HashSet<String>,
    layers: &mut [Vec<String>],
) -> bool {
    if !visited.insert(v.to_string()) {
        return false;
    }
    let Some(rank) = g.node(v).and_then(|n| n.rank) else {
        return false;
    };
    if let Some(layer) = layers.get_mut(rank.max(0) as usize) {
        layer.push(v.to_string());
    }
    true
}
