//! Layered graph layout.
//!
//! A compact Sugiyama-style pipeline: break cycles, assign ranks honouring each edge's `minlen`,
//! split long edges with dummy nodes, reduce crossings with weighted barycenter sweeps, and
//! assign coordinates so that no two boxes in a layer overlap. Every step iterates in graph
//! insertion order, so identical input always yields identical output.

pub use narwhal_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod model;
pub use model::{EdgeLabel, GraphLabel, NodeLabel, RankDir};

pub mod acyclic;
pub mod coordinate_system;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;
pub mod util;

mod pipeline;
pub use pipeline::layout;

/// The graph type every pipeline stage operates on.
pub type LayoutGraph = graphlib::Graph<NodeLabel, EdgeLabel, GraphLabel>;
