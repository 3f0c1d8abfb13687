//! Priority-queue record for shortest-path search.

use super::{Cost, NodeId};

/// A tentative path: reach `destination` at `cost`, arriving from `via`.
///
/// Records order by cost ascending, then by destination id. Wrap them in
/// `std::cmp::Reverse` to use `BinaryHeap` as a min-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PathRecord {
    /// Accumulated cost from the search origin. Compared first.
    pub cost: Cost,
    /// Node this path ends at.
    pub destination: NodeId,
    /// Node the last edge leaves from; `None` for the origin itself.
    pub via: Option<NodeId>,
}

impl PathRecord {
    /// The zero-cost record that seeds a search.
    pub fn origin(start: NodeId) -> Self {
        Self {
            cost: 0,
            destination: start,
            via: None,
        }
    }

    /// A record produced by relaxing the edge `via -> destination`.
    pub fn relaxed(destination: NodeId, cost: Cost, via: NodeId) -> Self {
        Self {
            cost,
            destination,
            via: Some(via),
        }
    }
}
