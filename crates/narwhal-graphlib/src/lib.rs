//! Graph container APIs used by `narwhal`.
//!
//! Nodes and edges are kept in insertion order so every traversal is deterministic. Layout code
//! relies on that property instead of sorting identifiers.

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions};

pub mod alg;
