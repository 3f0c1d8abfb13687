//! Fluent API for building Graph instances.

use crate::types::{checked_weight, GraphResult, Weight};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Undirected by default: every edge is inserted in both directions.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    directed: bool,
}

impl GraphBuilder {
    /// Create a new builder for an undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder that inserts edges in one direction only.
    pub fn directed() -> Self {
        Self {
            graph: Graph::new(),
            directed: true,
        }
    }

    /// Declare a node, even if no edge touches it.
    pub fn node(&mut self, name: &str) -> &mut Self {
        self.graph.get_or_create_node(name);
        self
    }

    /// Add an edge between two nodes, creating them as needed.
    pub fn link(&mut self, source: &str, target: &str, weight: Weight) -> &mut Self {
        if self.directed {
            self.graph.connect(source, target, weight);
        } else {
            self.graph.connect_undirected(source, target, weight);
        }
        self
    }

    /// Add an edge with a signed weight, rejecting negatives.
    pub fn try_link(&mut self, source: &str, target: &str, weight: i64) -> GraphResult<&mut Self> {
        let weight = checked_weight(weight)?;
        Ok(self.link(source, target, weight))
    }

    /// Whether edges are inserted in one direction only.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph {
        self.graph
    }
}
