//! Coordinate system adjustment helpers.
//!
//! The pipeline assumes a top-to-bottom coordinate system. For left-to-right / right-to-left
//! layouts we swap axes before ranking and restore them afterwards.

use crate::{LayoutGraph, RankDir};

pub fn adjust(g: &mut LayoutGraph) {
    if g.graph().rankdir.is_horizontal() {
        swap_width_height(g);
    }
}

pub fn undo(g: &mut LayoutGraph) {
    let rankdir = g.graph().rankdir;
    if matches!(rankdir, RankDir::BT | RankDir::RL) {
        reverse_y(g);
    }
    if rankdir.is_horizontal() {
        swap_xy(g);
        swap_width_height(g);
    }
}

fn swap_width_height(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_id, n| {
        (n.width, n.height) = (n.height, n.width);
    });
}

/// Mirrors along the primary axis, keeping the drawing in the positive quadrant.
fn reverse_y(g: &mut LayoutGraph) {
    let mut max_bottom: f64 = 0.0;
    let mut min_top: f64 = f64::INFINITY;
    g.for_each_node_mut(|_id, n| {
        if let Some(y) = n.y {
            max_bottom = max_bottom.max(y + n.height / 2.0);
            min_top = min_top.min(y - n.height / 2.0);
        }
    });
    if !min_top.is_finite() {
        return;
    }
    g.for_each_node_mut(|_id, n| {
        if let Some(y) = n.y {
            n.y = Some(max_bottom + min_top - y);
        }
    });
}

fn swap_xy(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_id, n| {
        if let (Some(x), Some(y)) = (n.x, n.y) {
            n.x = Some(y);
            n.y = Some(x);
        }
    });
}
