//! Hidden nodes and edges (collapsed subtrees) never take part in layout.

use crate::model::{Edge, Node};

/// The part of a chart that is laid out, borrowed from the full collections.
#[derive(Debug, Clone, Default)]
pub struct Visible<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Edge>,
}

pub fn visible<'a>(nodes: &'a [Node], edges: &'a [Edge]) -> Visible<'a> {
    Visible {
        nodes: nodes.iter().filter(|n| !n.hidden).collect(),
        edges: edges.iter().filter(|e| !e.hidden).collect(),
    }
}
