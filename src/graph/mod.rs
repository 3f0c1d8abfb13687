//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use traversal::{traverse, NodeVisitor, TraversalOrder};
pub use weighted_graph::Graph;
