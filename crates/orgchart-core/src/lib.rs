#![forbid(unsafe_code)]

//! Org-chart model and hierarchical auto-layout.
//!
//! [`layout`] is a pure function from nodes, edges, a direction, and a role ranking to
//! repositioned nodes. The rest of the crate covers what an editor needs around it: a
//! serializable [`Document`], role-list editing, snapshot history, and id generation.

pub mod config;
pub mod constraints;
pub mod document;
pub mod error;
pub mod history;
pub mod ids;
mod layout;
pub mod model;
pub mod rank;
pub mod reconcile;
pub mod roles;
pub mod visibility;

pub use config::LayoutConfig;
pub use document::Document;
pub use error::{Error, Result};
pub use history::History;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use layout::{LayoutOptions, LayoutResult, layout, layout_with};
pub use model::{
    DefaultNodeSizer, Direction, Edge, HandleSide, Node, NodeKind, NodeSizer, Size, XYPosition,
};
pub use rank::RoleRanks;
pub use roles::RoleList;
