//! Node ordering / crossing minimization.
//!
//! Layers start from a depth-first initial order and are then refined by alternating
//! downward/upward weighted barycenter sweeps. Same-layer constraints (from `minlen = 0` edges)
//! are enforced after every sort, and the layering with the fewest weighted crossings wins.

mod init_order;
pub use init_order::init_order;

mod barycenter;
pub use barycenter::{BarycenterEntry, barycenter, sort};

mod constraints;
pub use constraints::{LayerConstraint, apply_constraints, take_same_layer_edges};

mod cross_count;
pub use cross_count::cross_count;

mod ordering;
pub use ordering::{build_layer_matrix, order};
