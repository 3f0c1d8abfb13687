//! Dijkstra's single-source shortest paths.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use crate::graph::Graph;
use crate::types::{extend_cost, Cost, GraphResult, NodeId, PathRecord};

/// Result of a shortest-path search: the minimum cost of every reachable node.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    start: NodeId,
    /// Finalized cost per node.
    costs: HashMap<NodeId, Cost>,
    /// Nodes in the order they were finalized (non-decreasing cost).
    order: Vec<NodeId>,
    /// Node -> the node its cheapest path arrives from.
    predecessors: HashMap<NodeId, NodeId>,
}

impl ShortestPaths {
    /// The search origin.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Minimum cost to reach `id`, or `None` if unreachable.
    pub fn cost(&self, id: NodeId) -> Option<Cost> {
        self.costs.get(&id).copied()
    }

    /// Whether `id` is reachable from the start.
    pub fn contains(&self, id: NodeId) -> bool {
        self.costs.contains_key(&id)
    }

    /// Number of reachable nodes, including the start.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false for a completed search: the start reaches itself.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(node, cost)` pairs in finalization order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        self.order.iter().map(move |id| (*id, self.costs[id]))
    }

    /// The node the cheapest path to `id` arrives from.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors.get(&id).copied()
    }

    /// Nodes along a cheapest path from the start to `target`, inclusive.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.contains(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Costs keyed by node name.
    pub fn to_named(&self, graph: &Graph) -> BTreeMap<String, Cost> {
        self.iter()
            .filter_map(|(id, cost)| graph.name_of(id).map(|name| (name.to_string(), cost)))
            .collect()
    }
}

/// Compute the minimum cost from `start` to every reachable node.
///
/// Nodes the start cannot reach are absent from the result; the search ends
/// when the heap drains, so a disconnected graph terminates normally. Costs
/// saturate at `Cost::MAX` instead of wrapping.
pub fn dijkstra(graph: &Graph, start: &str) -> GraphResult<ShortestPaths> {
    let start_id = graph.require(start)?;
    let node_count = graph.node_count();

    let mut costs: HashMap<NodeId, Cost> = HashMap::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<PathRecord>> = BinaryHeap::new();
    let mut stale = 0usize;

    heap.push(Reverse(PathRecord::origin(start_id)));

    while let Some(Reverse(record)) = heap.pop() {
        if costs.contains_key(&record.destination) {
            stale += 1;
            continue;
        }

        let node = graph.node(record.destination);
        log::trace!("finalized {} at cost {}", node.name(), record.cost);
        costs.insert(record.destination, record.cost);
        order.push(record.destination);
        if let Some(via) = record.via {
            predecessors.insert(record.destination, via);
        }

        if order.len() == node_count {
            break;
        }

        for &(neighbor, weight) in node.neighbors() {
            if !costs.contains_key(&neighbor) {
                heap.push(Reverse(PathRecord::relaxed(
                    neighbor,
                    extend_cost(record.cost, weight),
                    record.destination,
                )));
            }
        }
    }

    log::debug!(
        "dijkstra from '{}': {} of {} nodes reached, {} stale entries discarded",
        start,
        order.len(),
        node_count,
        stale
    );

    Ok(ShortestPaths {
        start: start_id,
        costs,
        order,
        predecessors,
    })
}
