//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Allow several edges between the same pair of nodes, told apart by name.
    pub multigraph: bool,
}
