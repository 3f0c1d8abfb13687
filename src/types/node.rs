//! Node handle and the node struct.

use std::collections::HashMap;

use serde::Serialize;

use super::{Edge, Weight};

/// Handle to a node: its position in the owning graph's node arena.
///
/// Ids are assigned in creation order starting at 0 and are only meaningful
/// for the graph that issued them (and for spanning trees derived from it,
/// which keep the same node order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Handle for the node at `index` in `Graph::all_nodes()`.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of this node in `Graph::all_nodes()`.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named vertex with its outgoing weighted edges.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    /// Outgoing edges in insertion order.
    neighbors: Vec<(NodeId, Weight)>,
    /// neighbor -> position in `neighbors`.
    positions: HashMap<NodeId, usize>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            neighbors: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// This node's handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// This node's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges as `(neighbor, weight)`, in insertion order.
    pub fn neighbors(&self) -> &[(NodeId, Weight)] {
        &self.neighbors
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Weight of the edge to `neighbor`, if there is one.
    pub fn weight_to(&self, neighbor: NodeId) -> Option<Weight> {
        self.positions
            .get(&neighbor)
            .map(|&pos| self.neighbors[pos].1)
    }

    /// Whether this node has an outgoing edge to `neighbor`.
    pub fn is_adjacent(&self, neighbor: NodeId) -> bool {
        self.positions.contains_key(&neighbor)
    }

    /// Outgoing edges as `Edge` values.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors
            .iter()
            .map(move |&(target, weight)| Edge::new(self.id, target, weight))
    }

    /// Insert or overwrite the edge to `neighbor`.
    /// Returns true if the edge is new; an overwrite keeps its position.
    pub(crate) fn set_edge(&mut self, neighbor: NodeId, weight: Weight) -> bool {
        if let Some(&pos) = self.positions.get(&neighbor) {
            self.neighbors[pos].1 = weight;
            return false;
        }
        self.positions.insert(neighbor, self.neighbors.len());
        self.neighbors.push((neighbor, weight));
        true
    }
}
