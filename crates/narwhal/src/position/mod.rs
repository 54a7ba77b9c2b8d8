//! Coordinate assignment.
//!
//! The primary axis is simple: each layer is as thick as its tallest node, layers are separated
//! by `ranksep`, and nodes sit centered on their layer line.
//!
//! The cross axis starts from a packed placement and is refined by alternating sweeps. Each
//! sweep pulls every node towards the weighted mean of its neighbours in the previous layer
//! (downward) or next layer (upward) and solves the layer exactly with [`compaction::place`],
//! so neighbours never come closer than their separation. The last sweep is upward, which
//! centers parents over their children.

use crate::LayoutGraph;
use crate::order::build_layer_matrix;
use rustc_hash::FxHashMap as HashMap;

pub mod compaction;

const SWEEPS: usize = 8;

/// Weight of a node with no neighbour in the reference layer; small enough that it follows
/// whichever anchored nodes it is packed against.
const UNANCHORED_WEIGHT: f64 = 1e-2;

pub fn position(g: &mut LayoutGraph) {
    let layers = build_layer_matrix(g);
    position_y(g, &layers);
    position_x(g, &layers);
}

fn position_y(g: &mut LayoutGraph, layers: &[Vec<String>]) {
    let rank_sep = g.graph().ranksep;
    let mut prev_y: f64 = 0.0;
    for layer in layers {
        let max_h = layer
            .iter()
            .filter_map(|v| g.node(v).map(|n| n.height))
            .fold(0.0_f64, f64::max);
        for v in layer {
            if let Some(n) = g.node_mut(v) {
                n.y = Some(prev_y + max_h / 2.0);
            }
        }
        prev_y += max_h + rank_sep;
    }
}

/// Minimum center distance between `v` and its right neighbour `w`.
fn separation(g: &LayoutGraph, v: &str, w: &str) -> f64 {
    let label = g.graph();
    let half = |id: &str| -> f64 {
        match g.node(id) {
            Some(n) if n.dummy => n.width / 2.0 + label.edgesep / 2.0,
            Some(n) => n.width / 2.0 + label.nodesep / 2.0,
            None => label.nodesep / 2.0,
        }
    };
    half(v) + half(w)
}

/// Extra pull for long-edge chains so they stay straight.
fn edge_weight(g: &LayoutGraph, v: &str, w: &str, weight: f64) -> f64 {
    let dummy = |id: &str| g.node(id).is_some_and(|n| n.dummy);
    match (dummy(v), dummy(w)) {
        (true, true) => weight * 8.0,
        (true, false) | (false, true) => weight * 2.0,
        (false, false) => weight,
    }
}

fn position_x(g: &mut LayoutGraph, layers: &[Vec<String>]) {
    let gaps: Vec<Vec<f64>> = layers
        .iter()
        .map(|layer| {
            layer
                .windows(2)
                .map(|pair| separation(g, &pair[0], &pair[1]))
                .collect()
        })
        .collect();

    let mut xs: HashMap<String, f64> = HashMap::default();
    for (layer, gaps) in layers.iter().zip(&gaps) {
        let mut x = 0.0;
        for (i, v) in layer.iter().enumerate() {
            if i > 0 {
                x += gaps[i - 1];
            }
            xs.insert(v.clone(), x);
        }
    }

    let n = layers.len();
    for sweep in 0..SWEEPS {
        // Even sweeps go down, odd sweeps go up; `SWEEPS` is even so the last one is upward.
        let downward = sweep % 2 == 0;
        let ranks: Vec<usize> = if downward {
            (1..n).collect()
        } else {
            (0..n.saturating_sub(1)).rev().collect()
        };

        for r in ranks {
            let layer = &layers[r];
            let mut targets: Vec<f64> = Vec::with_capacity(layer.len());
            let mut weights: Vec<f64> = Vec::with_capacity(layer.len());
            for v in layer {
                let edges = if downward {
                    g.in_edges(v, None)
                } else {
                    g.out_edges(v, None)
                };
                let mut sum = 0.0;
                let mut weight = 0.0;
                for e in edges {
                    let other = if downward { &e.v } else { &e.w };
                    let Some(&ox) = xs.get(other.as_str()) else {
                        continue;
                    };
                    let base = g.edge_by_key(&e).map(|l| l.weight).unwrap_or(1.0).max(0.0);
                    let w = edge_weight(g, &e.v, &e.w, base);
                    sum += w * ox;
                    weight += w;
                }
                let current = xs.get(v.as_str()).copied().unwrap_or(0.0);
                if weight > 0.0 {
                    targets.push(sum / weight);
                    weights.push(weight);
                } else {
                    targets.push(current);
                    weights.push(UNANCHORED_WEIGHT);
                }
            }

            let placed = compaction::place(&targets, &weights, &gaps[r]);
            for (v, x) in layer.iter().zip(placed) {
                xs.insert(v.clone(), x);
            }
        }
    }

    for (v, x) in xs {
        if let Some(n) = g.node_mut(&v) {
            n.x = Some(x);
        }
    }
}
