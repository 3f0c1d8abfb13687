//! Prim-Jarnik minimum spanning tree, extended to a spanning forest.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::types::{extend_cost, Cost, Edge, Node, NodeId};

/// A minimum spanning forest: one tree per connected component.
#[derive(Debug, Clone, Default)]
pub struct SpanningForest {
    /// Accepted edges, in acceptance order. Each points away from its root.
    edges: Vec<Edge>,
    /// First node of each tree, in node creation order.
    roots: Vec<NodeId>,
    total_weight: Cost,
}

impl SpanningForest {
    /// Tree edges in the order they were accepted.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The node each tree was grown from.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of trees (connected components).
    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// Sum of all tree edge weights.
    pub fn total_weight(&self) -> Cost {
        self.total_weight
    }

    /// Build a graph holding every node of `source` and the tree edges.
    ///
    /// Nodes are created in `source` order, so ids carry over. Each tree
    /// edge is stored in both directions.
    pub(crate) fn into_graph(self, source: &Graph) -> Graph {
        let mut tree = Graph::new();
        for node in source.all_nodes() {
            tree.get_or_create_node(node.name());
        }
        for edge in self.edges {
            tree.connect_ids(edge.source, edge.target, edge.weight);
            tree.connect_ids(edge.target, edge.source, edge.weight);
        }
        tree
    }
}

/// Push every edge touching `node` whose far end is not yet in a tree.
///
/// `incoming` holds the node's in-edges already reversed to point away
/// from it, so both directions are considered.
fn push_candidates(
    heap: &mut BinaryHeap<Reverse<Edge>>,
    node: &Node,
    incoming: &[Edge],
    included: &[bool],
) {
    for edge in node.edges().chain(incoming.iter().copied()) {
        if !included[edge.target.index()] {
            heap.push(Reverse(edge));
        }
    }
}

/// Compute a minimum spanning forest with Prim-Jarnik's algorithm.
///
/// Edge direction is ignored: a directed edge `a -> b` connects `a` and `b`
/// like an undirected one, so a weakly connected graph yields one tree. The
/// first tree grows from the first node; each later tree grows from the
/// first node not yet covered.
pub fn prim_jarnik(graph: &Graph) -> SpanningForest {
    let nodes = graph.all_nodes();
    let mut included = vec![false; nodes.len()];
    let mut forest = SpanningForest::default();
    let mut heap: BinaryHeap<Reverse<Edge>> = BinaryHeap::new();
    let mut stale = 0usize;

    // target -> in-edges reversed to leave the target
    let mut incoming: Vec<Vec<Edge>> = vec![Vec::new(); nodes.len()];
    for edge in graph.edges() {
        incoming[edge.target.index()].push(edge.reversed());
    }

    for root in nodes {
        if included[root.id().index()] {
            continue;
        }
        included[root.id().index()] = true;
        forest.roots.push(root.id());
        push_candidates(&mut heap, root, &incoming[root.id().index()], &included);

        while let Some(Reverse(edge)) = heap.pop() {
            if included[edge.target.index()] {
                stale += 1;
                continue;
            }
            included[edge.target.index()] = true;
            forest.total_weight = extend_cost(forest.total_weight, edge.weight);
            forest.edges.push(edge);
            log::trace!("tree edge {} -> {} ({})", edge.source, edge.target, edge.weight);

            push_candidates(
                &mut heap,
                graph.node(edge.target),
                &incoming[edge.target.index()],
                &included,
            );
        }
    }

    log::debug!(
        "prim-jarnik: {} edges in {} trees, total weight {}, {} stale candidates discarded",
        forest.edges.len(),
        forest.roots.len(),
        forest.total_weight,
        stale
    );
    forest
}
