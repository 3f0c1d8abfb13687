//! The directed weighted edge.

use serde::Serialize;

use super::{NodeId, Weight};

/// A directed, weighted connection between two nodes.
///
/// Edges order by weight ascending, then by source and target id, so a
/// priority queue of edges pops ties in node creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    /// Edge weight. Compared first.
    pub weight: Weight,
    /// Origin of the edge.
    pub source: NodeId,
    /// Destination of the edge.
    pub target: NodeId,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self {
            weight,
            source,
            target,
        }
    }

    /// The same edge pointing the other way.
    pub fn reversed(self) -> Self {
        Self::new(self.target, self.source, self.weight)
    }
}
