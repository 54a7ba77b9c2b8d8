//! The layout pipeline.

use crate::order::LayerConstraint;
use crate::{LayoutGraph, acyclic, coordinate_system, normalize, order, position, rank, util};

/// Lays out `g` in place, writing `rank`, `order`, `x`, and `y` on every node.
///
/// `x`/`y` are box centers. Use a multigraph when parallel or opposite edges must survive cycle
/// breaking as distinct edges. The edge set is the same before and after the call.
pub fn layout(g: &mut LayoutGraph) {
    if g.node_count() == 0 {
        return;
    }

    coordinate_system::adjust(g);
    let self_loops = util::take_self_loops(g);
    acyclic::run(g);
    rank::rank(g);

    let same_layer = order::take_same_layer_edges(g);
    let constraints: Vec<LayerConstraint> = same_layer
        .iter()
        .map(|(key, _)| LayerConstraint::from(key))
        .collect();

    let chains = normalize::run(g);
    order::order(g, &constraints);
    position::position(g);
    normalize::undo(g, chains);
    util::translate_graph(g);

    util::restore_edges(g, same_layer);
    util::restore_edges(g, self_loops);
    acyclic::undo(g);
    coordinate_system::undo(g);

    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        "layered layout finished"
    );
}
