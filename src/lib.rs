//! wgraph: in-memory weighted graph with classic traversal and path algorithms.
//!
//! Nodes are named vertices with integer-weighted outgoing edges, stored in
//! an arena and addressed by `NodeId`. The graph supports breadth-first and
//! depth-first search, Dijkstra shortest paths and Prim-Jarnik minimum
//! spanning trees (spanning forests on disconnected graphs).

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{dijkstra, prim_jarnik, ShortestPaths, SpanningForest};
pub use format::EdgeListReader;
pub use graph::{traverse, Graph, GraphBuilder, NodeVisitor, TraversalOrder};
pub use types::{
    Cost, Edge, GraphError, GraphResult, Node, NodeId, PathRecord, Weight, COMMENT_PREFIX,
};
