//! Graph traversal iterators.
//!
//! This module provides breadth-first and depth-first traversal of any graph that
//! implements [`Adjacency`], plus an order-agnostic reachability walk.
//!
//! # Algorithms
//!
//! - [`BreadthFirstSearch`] / [`bfs`] - Visits nodes layer by layer using a FIFO queue
//! - [`DepthFirstSearch`] / [`dfs`] - Visits nodes depth first using a LIFO stack, with a
//!   selectable [`DepthFirstPolicy`]
//! - [`Reachable`] - Visits every reachable node once, in no particular order
//!
//! # State
//!
//! Every iterator owns its visited set and pending work and only borrows the graph, so
//! several iterators can walk the same graph at once. An iterator is ready until it runs
//! out of candidates; from then on it keeps returning `None`.
//!
//! # Tie-Breaking
//!
//! The `new` constructors require `N: Ord` and visit the neighbors of a node in
//! ascending order. The `unordered` constructors accept any node type and follow the
//! graph's adjacency order instead.
//!
//! # Start Node
//!
//! A start node that is not part of the graph, or a random start on an empty graph,
//! yields an iterator that is exhausted from the beginning.

use std::{cmp::Ordering, collections::HashSet, iter::FusedIterator};

use indexmap::IndexSet;
use rand::{seq::IteratorRandom, Rng};
use tracing::{debug, trace};

use crate::graph::{algorithms::queue::NodeQueue, Adjacency, GraphBase};

/// Comparison used to break ties between neighbors.
pub(crate) type NodeOrder<N> = fn(&N, &N) -> Ordering;

/// Ascending order of the node values.
pub(crate) fn natural_order<N: Ord>() -> NodeOrder<N> {
    Ord::cmp
}

/// Picks a start node uniformly at random.
///
/// # Returns
///
/// `None` when the graph has no nodes.
pub(crate) fn random_start<G, R>(graph: &G, rng: &mut R) -> Option<G::Node>
where
    G: GraphBase,
    R: Rng + ?Sized,
{
    graph.node_iter().choose(rng).cloned()
}

/// Returns `start` when it belongs to `graph`.
pub(crate) fn checked_start<G: GraphBase>(graph: &G, start: Option<G::Node>) -> Option<G::Node> {
    match start {
        Some(node) if graph.contains_node(&node) => Some(node),
        Some(node) => {
            debug!(start = ?node, "start node is not part of the graph");
            None
        }
        None => {
            debug!("no start node available, graph is empty");
            None
        }
    }
}

/// Breadth-first search iterator over graph nodes.
///
/// Each step dequeues a node, marks it visited and enqueues every adjacent node that is
/// neither visited nor already waiting in the queue. Every node reachable from the start
/// is produced exactly once, all nodes at distance `d` before any node at distance `d + 1`.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Adjacency`]
///
/// # Examples
///
/// ```rust
/// use loopless::{BreadthFirstSearch, UndirectedGraph};
///
/// let graph = UndirectedGraph::new(1..=5, [(1, 3), (1, 2), (2, 4), (3, 5)])?;
/// let order: Vec<u32> = BreadthFirstSearch::new(&graph, 1).collect();
///
/// assert_eq!(order, vec![1, 2, 3, 4, 5]);
/// # Ok::<(), loopless::Error>(())
/// ```
pub struct BreadthFirstSearch<'g, G: Adjacency> {
    graph: &'g G,
    queue: NodeQueue<G::Node>,
    visited: HashSet<G::Node>,
    order: Option<NodeOrder<G::Node>>,
}

impl<'g, G: Adjacency> BreadthFirstSearch<'g, G> {
    fn seeded(graph: &'g G, start: Option<G::Node>, order: Option<NodeOrder<G::Node>>) -> Self {
        let mut queue = NodeQueue::new();
        if let Some(start) = checked_start(graph, start) {
            queue.enqueue(start);
        }

        BreadthFirstSearch {
            graph,
            queue,
            visited: HashSet::new(),
            order,
        }
    }

    /// Creates a breadth-first search that visits neighbors in graph adjacency order.
    pub fn unordered(graph: &'g G, start: G::Node) -> Self {
        Self::seeded(graph, Some(start), None)
    }

    /// Creates an unordered breadth-first search from a random start node.
    pub fn unordered_with_random_start<R: Rng + ?Sized>(graph: &'g G, rng: &mut R) -> Self {
        Self::seeded(graph, random_start(graph, rng), None)
    }

    /// Number of nodes visited so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, G> BreadthFirstSearch<'g, G>
where
    G: Adjacency,
    G::Node: Ord,
{
    /// Creates a breadth-first search from `start` that breaks ties by ascending node value.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph to traverse
    /// * `start` - The starting node for traversal
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        Self::seeded(graph, Some(start), Some(natural_order()))
    }

    /// Creates an ordered breadth-first search from a node chosen uniformly at random.
    pub fn with_random_start<R: Rng + ?Sized>(graph: &'g G, rng: &mut R) -> Self {
        Self::seeded(graph, random_start(graph, rng), Some(natural_order()))
    }
}

impl<G: Adjacency> Iterator for BreadthFirstSearch<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.dequeue()?;
        self.visited.insert(node.clone());

        let mut pending: Vec<&G::Node> = self
            .graph
            .adjacent(&node)
            .filter(|next| !self.visited.contains(*next) && !self.queue.contains(*next))
            .collect();
        if let Some(order) = self.order {
            pending.sort_by(|a, b| order(a, b));
        }
        for next in pending {
            self.queue.enqueue(next.clone());
        }

        if self.queue.is_empty() {
            trace!(visited = self.visited.len(), "breadth-first search exhausted");
        }
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.order().saturating_sub(self.visited.len());
        (self.queue.len(), Some(remaining))
    }
}

impl<G: Adjacency> FusedIterator for BreadthFirstSearch<'_, G> {}

/// Returns an ordered breadth-first search iterator starting from `start`.
///
/// # Complexity
///
/// - Time: O(V + E) plus sorting the neighbors of each node
/// - Space: O(V) for the visited set and queue
pub fn bfs<G>(graph: &G, start: G::Node) -> BreadthFirstSearch<'_, G>
where
    G: Adjacency,
    G::Node: Ord,
{
    BreadthFirstSearch::new(graph, start)
}

/// Controls which neighbors depth-first search pushes onto its stack.
///
/// Both policies visit the same set of nodes. They differ in stack size and in the cost
/// of each push, and may produce different visiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthFirstPolicy {
    /// Push every unvisited neighbor, even if it is already on the stack.
    ///
    /// Pushing is cheap but the stack may hold duplicates; visited nodes are skipped
    /// when popped.
    #[default]
    QueueAllUnvisited,
    /// Push only neighbors that are neither visited nor already on the stack.
    ///
    /// Keeps the stack small at the price of a linear scan of the stack per neighbor.
    QueueOnlyUnqueued,
}

/// Depth-first search iterator over graph nodes.
///
/// Nodes are produced in pre-order: a node is returned before any node discovered
/// through it. With the ordered constructors the neighbors of a node are pushed in
/// descending order, so they are popped and visited in ascending order.
///
/// # Examples
///
/// ```rust
/// use loopless::{DepthFirstPolicy, DepthFirstSearch, UndirectedGraph};
///
/// let graph = UndirectedGraph::new(1..=4, [(1, 2), (1, 3), (2, 3), (3, 4)])?;
///
/// let order: Vec<u32> = DepthFirstSearch::new(&graph, 1).collect();
/// assert_eq!(order, vec![1, 2, 3, 4]);
///
/// let compact = DepthFirstSearch::new(&graph, 1).with_policy(DepthFirstPolicy::QueueOnlyUnqueued);
/// assert_eq!(compact.count(), 4);
/// # Ok::<(), loopless::Error>(())
/// ```
pub struct DepthFirstSearch<'g, G: Adjacency> {
    graph: &'g G,
    stack: Vec<G::Node>,
    visited: HashSet<G::Node>,
    order: Option<NodeOrder<G::Node>>,
    policy: DepthFirstPolicy,
}

impl<'g, G: Adjacency> DepthFirstSearch<'g, G> {
    fn seeded(graph: &'g G, start: Option<G::Node>, order: Option<NodeOrder<G::Node>>) -> Self {
        DepthFirstSearch {
            graph,
            stack: checked_start(graph, start).into_iter().collect(),
            visited: HashSet::new(),
            order,
            policy: DepthFirstPolicy::default(),
        }
    }

    /// Creates a depth-first search that pushes neighbors in graph adjacency order.
    pub fn unordered(graph: &'g G, start: G::Node) -> Self {
        Self::seeded(graph, Some(start), None)
    }

    /// Creates an unordered depth-first search from a random start node.
    pub fn unordered_with_random_start<R: Rng + ?Sized>(graph: &'g G, rng: &mut R) -> Self {
        Self::seeded(graph, random_start(graph, rng), None)
    }

    /// Replaces the queuing policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DepthFirstPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The queuing policy in effect.
    #[must_use]
    pub fn policy(&self) -> DepthFirstPolicy {
        self.policy
    }

    /// Number of nodes visited so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, G> DepthFirstSearch<'g, G>
where
    G: Adjacency,
    G::Node: Ord,
{
    /// Creates a depth-first search from `start` that visits smaller neighbors first.
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        Self::seeded(graph, Some(start), Some(natural_order()))
    }

    /// Creates an ordered depth-first search from a node chosen uniformly at random.
    pub fn with_random_start<R: Rng + ?Sized>(graph: &'g G, rng: &mut R) -> Self {
        Self::seeded(graph, random_start(graph, rng), Some(natural_order()))
    }
}

impl<G: Adjacency> Iterator for DepthFirstSearch<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(node) = self.stack.pop() else {
                trace!(visited = self.visited.len(), "depth-first search exhausted");
                return None;
            };
            if !self.visited.insert(node.clone()) {
                continue;
            }

            let mut pending: Vec<&G::Node> = self
                .graph
                .adjacent(&node)
                .filter(|next| !self.visited.contains(*next))
                .collect();
            if self.policy == DepthFirstPolicy::QueueOnlyUnqueued {
                pending.retain(|next| !self.stack.contains(*next));
            }
            if let Some(order) = self.order {
                pending.sort_by(|a, b| order(b, a));
            }
            self.stack.extend(pending.into_iter().cloned());

            return Some(node);
        }
    }
}

impl<G: Adjacency> FusedIterator for DepthFirstSearch<'_, G> {}

/// Returns an ordered depth-first search iterator starting from `start`.
///
/// # Complexity
///
/// - Time: O(V + E) with the default policy
/// - Space: O(E) for the stack with the default policy, O(V) otherwise
pub fn dfs<G>(graph: &G, start: G::Node) -> DepthFirstSearch<'_, G>
where
    G: Adjacency,
    G::Node: Ord,
{
    DepthFirstSearch::new(graph, start)
}

/// Visits every node reachable from a start node exactly once, in no particular order.
///
/// Pending nodes are kept in a set, so a node discovered twice is only pending once
/// and no separate queued check is needed.
///
/// # Examples
///
/// ```rust
/// use loopless::{DirectedGraph, Reachable};
///
/// let graph = DirectedGraph::new(1..=4, [(1, 2), (2, 3), (4, 1)])?;
/// let mut reachable: Vec<u32> = Reachable::new(&graph, 1).collect();
/// reachable.sort_unstable();
///
/// assert_eq!(reachable, vec![1, 2, 3]);
/// # Ok::<(), loopless::Error>(())
/// ```
pub struct Reachable<'g, G: Adjacency> {
    graph: &'g G,
    pending: IndexSet<G::Node>,
    visited: HashSet<G::Node>,
}

impl<'g, G: Adjacency> Reachable<'g, G> {
    fn seeded(graph: &'g G, start: Option<G::Node>) -> Self {
        Reachable {
            graph,
            pending: checked_start(graph, start).into_iter().collect(),
            visited: HashSet::new(),
        }
    }

    /// Creates a reachability walk from `start`.
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        Self::seeded(graph, Some(start))
    }

    /// Creates a reachability walk from a node chosen uniformly at random.
    pub fn with_random_start<R: Rng + ?Sized>(graph: &'g G, rng: &mut R) -> Self {
        Self::seeded(graph, random_start(graph, rng))
    }
}

impl<G: Adjacency> Iterator for Reachable<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(node) = self.pending.pop() else {
            trace!(visited = self.visited.len(), "reachability walk exhausted");
            return None;
        };
        self.visited.insert(node.clone());

        for next in self.graph.adjacent(&node) {
            if !self.visited.contains(next) {
                self.pending.insert(next.clone());
            }
        }

        Some(node)
    }
}

impl<G: Adjacency> FusedIterator for Reachable<'_, G> {}
