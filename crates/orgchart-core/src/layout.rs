//! The layout entry point: visibility, role ranks, constraints, layered layout, reconciliation.

use crate::config::LayoutConfig;
use crate::constraints;
use crate::model::{DefaultNodeSizer, Direction, Edge, Node, NodeSizer, XYPosition};
use crate::rank::RoleRanks;
use crate::reconcile::reconcile;
use crate::visibility;
use indexmap::IndexMap;
use narwhal::graphlib::{Graph, GraphOptions, alg};
use narwhal::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel, RankDir};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

impl From<Direction> for RankDir {
    fn from(value: Direction) -> Self {
        match value {
            Direction::TB => RankDir::TB,
            Direction::LR => RankDir::LR,
        }
    }
}

#[derive(Clone)]
pub struct LayoutOptions {
    pub config: LayoutConfig,
    pub sizer: Arc<dyn NodeSizer>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            sizer: Arc::new(DefaultNodeSizer),
        }
    }
}

impl fmt::Debug for LayoutOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutOptions")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LayoutOptions {
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_sizer(mut self, sizer: impl NodeSizer + 'static) -> Self {
        self.sizer = Arc::new(sizer);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Absolute top-left of every laid-out node, before container-relative conversion.
    #[serde(skip)]
    pub absolute: IndexMap<String, XYPosition>,
    /// Layer index of every laid-out node along the primary axis.
    #[serde(skip)]
    pub layers: IndexMap<String, usize>,
}

/// Lays out the visible part of an org chart with the default sizes and spacing.
///
/// `roles` ranks job titles, highest first. Hidden nodes come back untouched and `edges` is
/// returned as given.
pub fn layout<S: AsRef<str>>(
    nodes: &[Node],
    edges: &[Edge],
    direction: Direction,
    roles: &[S],
) -> LayoutResult {
    layout_with(nodes, edges, direction, roles, &LayoutOptions::default())
}

pub fn layout_with<S: AsRef<str>>(
    nodes: &[Node],
    edges: &[Edge],
    direction: Direction,
    roles: &[S],
    options: &LayoutOptions,
) -> LayoutResult {
    let visible = visibility::visible(nodes, edges);
    let ranks = RoleRanks::new(roles);
    let config = options.config.normalized();
    let constraints = constraints::build(&visible, &ranks, &config);

    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel {
        rankdir: direction.into(),
        nodesep: config.nodesep,
        ranksep: config.ranksep,
        edgesep: config.edgesep,
        ..Default::default()
    });
    for node in &visible.nodes {
        let size = options.sizer.size(node);
        g.set_node(node.id.clone(), NodeLabel::with_size(size.width, size.height));
    }
    for edge in &constraints.edges {
        g.set_edge_named(
            edge.source.clone(),
            edge.target.clone(),
            Some(edge.name.clone()),
            Some(EdgeLabel {
                minlen: edge.minlen,
                weight: edge.weight,
                ..Default::default()
            }),
        );
    }

    let cycles = alg::find_cycles(&g);
    if !cycles.is_empty() {
        tracing::debug!(
            cycles = cycles.len(),
            "chart contains cycles; back edges are laid out best-effort"
        );
    }

    narwhal::layout(&mut g);

    let mut absolute: IndexMap<String, XYPosition> = IndexMap::new();
    let mut layers: IndexMap<String, usize> = IndexMap::new();
    for node in &visible.nodes {
        let Some(label) = g.node(&node.id) else {
            continue;
        };
        let (Some(x), Some(y)) = (label.x, label.y) else {
            continue;
        };
        absolute.insert(
            node.id.clone(),
            XYPosition::new(x - label.width / 2.0, y - label.height / 2.0),
        );
        if let Some(rank) = label.rank {
            layers.insert(node.id.clone(), rank.max(0) as usize);
        }
    }

    tracing::debug!(
        nodes = absolute.len(),
        hidden = nodes.len() - visible.nodes.len(),
        edges = constraints.real_edges().count(),
        ordering_edges = constraints.ordering_edges().count(),
        ?direction,
        "org chart laid out"
    );

    LayoutResult {
        nodes: reconcile(nodes, &absolute, direction),
        edges: edges.to_vec(),
        absolute,
        layers,
    }
}
