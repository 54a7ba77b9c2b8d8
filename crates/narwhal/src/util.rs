//! Miscellaneous layout helpers.

use crate::graphlib::EdgeKey;
use crate::{EdgeLabel, LayoutGraph};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bounding box of every positioned node, or `None` for an empty graph.
pub fn bounding_box(g: &LayoutGraph) -> Option<Rect> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for v in g.nodes() {
        let Some(n) = g.node(v) else {
            continue;
        };
        let (Some(x), Some(y)) = (n.x, n.y) else {
            continue;
        };
        min_x = min_x.min(x - n.width / 2.0);
        min_y = min_y.min(y - n.height / 2.0);
        max_x = max_x.max(x + n.width / 2.0);
        max_y = max_y.max(y + n.height / 2.0);
    }
    if !min_x.is_finite() {
        return None;
    }
    Some(Rect {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// Moves the drawing so its top-left corner sits at (`marginx`, `marginy`).
pub fn translate_graph(g: &mut LayoutGraph) {
    let Some(bbox) = bounding_box(g) else {
        return;
    };
    let dx = g.graph().marginx - bbox.x;
    let dy = g.graph().marginy - bbox.y;
    g.for_each_node_mut(|_id, n| {
        if let Some(x) = n.x {
            n.x = Some(x + dx);
        }
        if let Some(y) = n.y {
            n.y = Some(y + dy);
        }
    });
}

/// Removes self-loops; they never influence ranks, orders, or coordinates.
pub fn take_self_loops(g: &mut LayoutGraph) -> Vec<(EdgeKey, EdgeLabel)> {
    g.remove_edges_where(|e, _| e.is_self_loop())
}

/// Re-inserts edges taken out by an earlier stage.
pub fn restore_edges(g: &mut LayoutGraph, edges: Vec<(EdgeKey, EdgeLabel)>) {
    for (key, label) in edges {
        g.set_edge_key(key, label);
    }
}
