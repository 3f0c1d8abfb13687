//! Graph traversal algorithms (BFS and DFS).

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphResult, Node, NodeId};

use super::Graph;

/// Order in which a traversal expands its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// FIFO frontier: nodes come out in non-decreasing hop count.
    BreadthFirst,
    /// LIFO frontier: the most recently pushed neighbor comes out first.
    DepthFirst,
}

/// Callback invoked once per node, the first time a traversal reaches it.
///
/// Implemented for every `FnMut(&Node)` closure.
pub trait NodeVisitor {
    /// Called with each newly visited node.
    fn visit(&mut self, node: &Node);
}

impl<F> NodeVisitor for F
where
    F: FnMut(&Node),
{
    fn visit(&mut self, node: &Node) {
        self(node)
    }
}

/// Pending nodes. Duplicates are allowed; they are skipped when popped.
enum Frontier {
    Queue(VecDeque<NodeId>),
    Stack(Vec<NodeId>),
}

impl Frontier {
    fn new(order: TraversalOrder, start: NodeId) -> Self {
        match order {
            TraversalOrder::BreadthFirst => Self::Queue(VecDeque::from([start])),
            TraversalOrder::DepthFirst => Self::Stack(vec![start]),
        }
    }

    fn push(&mut self, id: NodeId) {
        match self {
            Self::Queue(queue) => queue.push_back(id),
            Self::Stack(stack) => stack.push(id),
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        match self {
            Self::Queue(queue) => queue.pop_front(),
            Self::Stack(stack) => stack.pop(),
        }
    }
}

/// Visit every node reachable from `start` exactly once.
///
/// Neighbors are pushed in insertion order. A node may sit in the frontier
/// more than once; it is visited when first popped and skipped afterwards.
/// Fails with `NodeNotFound` before visiting anything if `start` is absent.
pub fn traverse<V: NodeVisitor + ?Sized>(
    graph: &Graph,
    start: &str,
    order: TraversalOrder,
    visitor: &mut V,
) -> GraphResult<()> {
    let start_id = graph.require(start)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut frontier = Frontier::new(order, start_id);
    let mut skipped = 0usize;

    while let Some(current) = frontier.pop() {
        if !visited.insert(current) {
            skipped += 1;
            continue;
        }
        let node = graph.node(current);
        log::trace!("{:?} visiting {}", order, node.name());
        visitor.visit(node);

        for &(neighbor, _) in node.neighbors() {
            if !visited.contains(&neighbor) {
                frontier.push(neighbor);
            }
        }
    }

    log::debug!(
        "{:?} from '{}': {} visited, {} duplicate entries skipped",
        order,
        start,
        visited.len(),
        skipped
    );
    Ok(())
}
