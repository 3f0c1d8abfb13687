//! All data types for the wgraph library.

pub mod edge;
pub mod error;
pub mod node;
pub mod path;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
pub use path::PathRecord;

/// Weight of a single edge. Unsigned, so negative weights cannot be stored.
pub type Weight = u32;

/// Accumulated cost of a path: the sum of its edge weights.
pub type Cost = u64;

/// Lines of an edge-list file starting with this character are ignored.
pub const COMMENT_PREFIX: char = '#';

/// Add an edge weight to a path cost, saturating at `Cost::MAX`.
///
/// Saturation keeps heap ordering intact. With 32-bit weights it cannot be
/// reached by any graph that fits in memory.
pub fn extend_cost(cost: Cost, weight: Weight) -> Cost {
    cost.saturating_add(Cost::from(weight))
}

/// Convert a signed weight to a `Weight`, rejecting negatives and overflow.
pub fn checked_weight(raw: i64) -> GraphResult<Weight> {
    Weight::try_from(raw).map_err(|_| GraphError::InvalidWeight(raw))
}
