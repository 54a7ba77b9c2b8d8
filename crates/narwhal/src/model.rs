//! Layout label types.
//!
//! These are plain `Clone`-friendly records: callers fill in sizes and edge constraints, the
//! pipeline fills in ranks, orders, and center coordinates.

use crate::graphlib::EdgeKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

impl RankDir {
    /// Whether ranks advance along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, RankDir::LR | RankDir::RL)
    }
}

#[derive(Debug, Clone)]
pub struct GraphLabel {
    pub rankdir: RankDir,
    /// Gap between neighbouring real nodes inside a layer.
    pub nodesep: f64,
    /// Gap between consecutive layers.
    pub ranksep: f64,
    /// Gap next to dummy nodes of long edges.
    pub edgesep: f64,
    pub marginx: f64,
    pub marginy: f64,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 50.0,
            ranksep: 50.0,
            edgesep: 20.0,
            marginx: 0.0,
            marginy: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    /// Center x, set by layout.
    pub x: Option<f64>,
    /// Center y, set by layout.
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
    pub dummy: bool,
    /// For dummy nodes: the long edge this node stands in for.
    pub edge_obj: Option<EdgeKey>,
}

impl NodeLabel {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    /// Minimum number of ranks the edge spans. `0` lets both ends share a rank, in which case the
    /// edge orders its tail before its head inside that rank.
    pub minlen: usize,
    /// Influence on ordering and cross-axis alignment.
    pub weight: f64,
    pub reversed: bool,
    pub forward_name: Option<String>,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
            reversed: false,
            forward_name: None,
        }
    }
}
