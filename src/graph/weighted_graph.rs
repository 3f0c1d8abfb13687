//! Core graph structure: a node arena keyed by name.

use std::collections::HashMap;

use crate::engine::{dijkstra, prim_jarnik, ShortestPaths, SpanningForest};
use crate::types::{checked_weight, Cost, Edge, GraphError, GraphResult, Node, NodeId, Weight};

use super::traversal::{traverse, NodeVisitor, TraversalOrder};

/// An in-memory directed graph with named nodes and integer edge weights.
///
/// Nodes live in an arena in creation order; `NodeId` is the arena position.
/// Neighbors are stored as `(NodeId, Weight)` pairs, so the graph owns every
/// node outright and there are no reference cycles.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, in creation order.
    nodes: Vec<Node>,
    /// Name index: name -> arena position.
    index: HashMap<String, NodeId>,
    /// Number of directed edges.
    edge_count: usize,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node with the given name, creating it if absent.
    ///
    /// Repeated calls with the same name return the same id.
    pub fn get_or_create_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Whether a node with this name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All nodes, in creation order.
    pub fn all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node's id by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Get a node by id.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a node by name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).and_then(|id| self.get_node(id))
    }

    /// Name of the node with this id.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.get_node(id).map(Node::name)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Every directed edge, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().flat_map(Node::edges)
    }

    /// Sum of all directed edge weights.
    pub fn total_weight(&self) -> Cost {
        self.edges().map(|e| Cost::from(e.weight)).sum()
    }

    /// Add the directed edge `source -> target`, creating missing endpoints.
    ///
    /// If the edge already exists its weight is overwritten.
    pub fn connect(&mut self, source: &str, target: &str, weight: Weight) {
        let source = self.get_or_create_node(source);
        let target = self.get_or_create_node(target);
        self.connect_ids(source, target, weight);
    }

    /// Add the edge in both directions with the same weight.
    pub fn connect_undirected(&mut self, a: &str, b: &str, weight: Weight) {
        self.connect(a, b, weight);
        self.connect(b, a, weight);
    }

    /// Like `connect`, but takes a signed weight and rejects negatives.
    ///
    /// Nothing is created when the weight is rejected.
    pub fn try_connect(&mut self, source: &str, target: &str, weight: i64) -> GraphResult<()> {
        let weight = checked_weight(weight)?;
        self.connect(source, target, weight);
        Ok(())
    }

    /// Add the directed edge between two existing nodes.
    pub(crate) fn connect_ids(&mut self, source: NodeId, target: NodeId, weight: Weight) {
        if self.nodes[source.0].set_edge(target, weight) {
            self.edge_count += 1;
        }
    }

    /// Resolve a start node name, or fail with `NodeNotFound`.
    pub(crate) fn require(&self, name: &str) -> GraphResult<NodeId> {
        self.node_id(name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    /// Node by id, for ids this graph issued.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Breadth-first search from `start`, visiting each reachable node once.
    pub fn bfs<V: NodeVisitor>(&self, start: &str, mut visitor: V) -> GraphResult<()> {
        traverse(self, start, TraversalOrder::BreadthFirst, &mut visitor)
    }

    /// Depth-first search from `start`, visiting each reachable node once.
    pub fn dfs<V: NodeVisitor>(&self, start: &str, mut visitor: V) -> GraphResult<()> {
        traverse(self, start, TraversalOrder::DepthFirst, &mut visitor)
    }

    /// Node ids in breadth-first visit order.
    pub fn bfs_order(&self, start: &str) -> GraphResult<Vec<NodeId>> {
        self.visit_order(start, TraversalOrder::BreadthFirst)
    }

    /// Node ids in depth-first visit order.
    pub fn dfs_order(&self, start: &str) -> GraphResult<Vec<NodeId>> {
        self.visit_order(start, TraversalOrder::DepthFirst)
    }

    fn visit_order(&self, start: &str, order: TraversalOrder) -> GraphResult<Vec<NodeId>> {
        let mut visited = Vec::new();
        traverse(self, start, order, &mut |node: &Node| visited.push(node.id()))?;
        Ok(visited)
    }

    /// Minimum cost from `start` to every reachable node (Dijkstra).
    pub fn dijkstra(&self, start: &str) -> GraphResult<ShortestPaths> {
        dijkstra(self, start)
    }

    /// Minimum spanning forest (Prim-Jarnik), one tree per component.
    pub fn minimum_spanning_forest(&self) -> SpanningForest {
        prim_jarnik(self)
    }

    /// Minimum spanning tree as a graph with the same nodes as this one.
    ///
    /// Tree edges are stored in both directions. On a disconnected graph the
    /// result is a spanning forest.
    pub fn minimum_spanning_tree(&self) -> Graph {
        self.minimum_spanning_forest().into_graph(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_index_matches_arena() {
        let mut graph = Graph::new();
        graph.connect("a", "b", 1);
        graph.connect("c", "a", 2);

        for (pos, node) in graph.all_nodes().iter().enumerate() {
            assert_eq!(node.id().index(), pos);
            assert_eq!(graph.node_id(node.name()), Some(node.id()));
        }
        assert_eq!(graph.all_nodes().len(), 3);
    }

    #[test]
    fn overwrite_does_not_change_edge_count() {
        let mut graph = Graph::new();
        graph.connect("a", "b", 1);
        graph.connect("a", "b", 8);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.total_weight(), 8);
    }

    #[test]
    fn rejected_weight_creates_nothing() {
        let mut graph = Graph::new();
        assert!(graph.try_connect("a", "b", -1).is_err());
        assert_eq!(graph.node_count(), 0);
    }
}
