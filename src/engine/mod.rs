//! Weighted algorithms: shortest paths and minimum spanning trees.
//!
//! Both searches share one technique: a binary min-heap without
//! decrease-key. Improved candidates are pushed as new entries and entries
//! for already-settled nodes are discarded when popped. A stale entry never
//! carries a cost better than the settled one, so discarding it is safe.

pub mod shortest_path;
pub mod spanning_tree;

pub use shortest_path::{dijkstra, ShortestPaths};
pub use spanning_tree::{prim_jarnik, SpanningForest};
