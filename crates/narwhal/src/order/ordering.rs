use super::{LayerConstraint, apply_constraints, barycenter, cross_count, init_order, sort};
use crate::LayoutGraph;
use rustc_hash::FxHashMap as HashMap;

/// Orders every layer and writes the result to `NodeLabel::order`.
pub fn order(g: &mut LayoutGraph, constraints: &[LayerConstraint]) {
    let mut layering = init_order(g);
    if layering.is_empty() {
        return;
    }
    for layer in &mut layering {
        *layer = apply_constraints(std::mem::take(layer), constraints);
    }

    let mut best_cc = cross_count(g, &layering);
    let mut best = layering.clone();

    let mut i: usize = 0;
    let mut last_best: usize = 0;
    while last_best < 4 {
        let downward = i % 2 == 1;
        let bias_right = i % 4 >= 2;
        sweep(g, &mut layering, constraints, downward, bias_right);

        let cc = cross_count(g, &layering);
        if cc < best_cc {
            last_best = 0;
            best_cc = cc;
            best = layering.clone();
        }
        last_best += 1;
        i += 1;
    }

    tracing::trace!(sweeps = i, crossings = best_cc, "ordered layers");
    assign_order(g, &best);
}

fn sweep(
    g: &LayoutGraph,
    layering: &mut [Vec<String>],
    constraints: &[LayerConstraint],
    downward: bool,
    bias_right: bool,
) {
    let n = layering.len();
    let ranks: Vec<usize> = if downward {
        (1..n).collect()
    } else {
        (0..n.saturating_sub(1)).rev().collect()
    };

    for r in ranks {
        let fixed_rank = if downward { r - 1 } else { r + 1 };
        let fixed: HashMap<String, usize> = layering[fixed_rank]
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let entries = barycenter(g, &layering[r], &fixed, downward);
        layering[r] = apply_constraints(sort(entries, bias_right), constraints);
    }
}

fn assign_order(g: &mut LayoutGraph, layering: &[Vec<String>]) {
    for layer in layering {
        for (i, v) in layer.iter().enumerate() {
            if let Some(n) = g.node_mut(v) {
                n.order = Some(i);
            }
        }
    }
}

/// Groups ranked nodes into layers, each sorted by `order` (insertion order when unset).
pub fn build_layer_matrix(g: &LayoutGraph) -> Vec<Vec<String>> {
    let max_rank = g
        .nodes()
        .filter_map(|v| g.node(v).and_then(|n| n.rank))
        .max()
        .unwrap_or(-1);
    let mut layers: Vec<Vec<String>> = vec![Vec::new(); (max_rank + 1).max(0) as usize];
    for v in g.nodes() {
        let Some(rank) = g.node(v).and_then(|n| n.rank) else {
            continue;
        };
        if let Some(layer) = layers.get_mut(rank.max(0) as usize) {
            layer.push(v.to_string());
        }
    }
    for layer in &mut layers {
        layer.sort_by_key(|v| g.node(v).and_then(|n| n.order).unwrap_or(usize::MAX));
    }
    layers
}
