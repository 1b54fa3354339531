//! Frontier-based breadth-first expansion and unweighted distance.
//!
//! [`Breadthwise`] produces whole layers instead of single nodes: first the start node,
//! then every node one step away, then every node two steps away, and so on. Counting
//! layers until a target appears gives the length of a shortest path, which is what
//! [`distance`] does.

use std::{collections::HashSet, iter::FusedIterator};

use indexmap::IndexSet;
use rand::Rng;
use tracing::trace;

use crate::graph::{
    algorithms::traversal::{checked_start, natural_order, random_start, NodeOrder},
    Adjacency,
};

/// Iterator over the breadth-first layers of a graph.
///
/// Every item is the set of nodes first reached in the same number of steps. Layer `0`
/// holds only the start node. Iteration ends with the first empty frontier.
///
/// # Examples
///
/// ```rust
/// use loopless::{Breadthwise, UndirectedGraph};
///
/// let graph = UndirectedGraph::new(1..=5, [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)])?;
/// let layers: Vec<Vec<u32>> = Breadthwise::new(&graph, 1)
///     .map(|layer| layer.into_iter().collect())
///     .collect();
///
/// assert_eq!(layers, vec![vec![1], vec![2, 3], vec![4], vec![5]]);
/// # Ok::<(), loopless::Error>(())
/// ```
pub struct Breadthwise<'g, G: Adjacency> {
    graph: &'g G,
    frontier: IndexSet<G::Node>,
    visited: HashSet<G::Node>,
    order: Option<NodeOrder<G::Node>>,
}

impl<'g, G: Adjacency> Breadthwise<'g, G> {
    fn seeded(graph: &'g G, start: Option<G::Node>, order: Option<NodeOrder<G::Node>>) -> Self {
        Breadthwise {
            graph,
            frontier: checked_start(graph, start).into_iter().collect(),
            visited: HashSet::new(),
            order,
        }
    }

    /// Creates a layer iterator whose layers follow graph adjacency order.
    pub fn unordered(graph: &'g G, start: G::Node) -> Self {
        Self::seeded(graph, Some(start), None)
    }

    /// Creates an unordered layer iterator from a random start node.
    pub fn unordered_with_random_start<R: Rng + ?Sized>(graph: &'g G, rng: &mut R) -> Self {
        Self::seeded(graph, random_start(graph, rng), None)
    }

    /// Number of nodes produced so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, G> Breadthwise<'g, G>
where
    G: Adjacency,
    G::Node: Ord,
{
    /// Creates a layer iterator from `start` whose layers are sorted ascending.
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        Self::seeded(graph, Some(start), Some(natural_order()))
    }

    /// Creates a sorted layer iterator from a node chosen uniformly at random.
    pub fn with_random_start<R: Rng + ?Sized>(graph: &'g G, rng: &mut R) -> Self {
        Self::seeded(graph, random_start(graph, rng), Some(natural_order()))
    }
}

impl<G: Adjacency> Iterator for Breadthwise<'_, G> {
    type Item = IndexSet<G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }

        let layer = std::mem::take(&mut self.frontier);
        self.visited.extend(layer.iter().cloned());

        let mut frontier: IndexSet<G::Node> = layer
            .iter()
            .flat_map(|node| self.graph.adjacent(node))
            .filter(|next| !self.visited.contains(*next))
            .cloned()
            .collect();
        if let Some(order) = self.order {
            frontier.sort_by(|a, b| order(a, b));
        }
        if frontier.is_empty() {
            trace!(visited = self.visited.len(), "frontier exhausted");
        }
        self.frontier = frontier;

        Some(layer)
    }
}

impl<G: Adjacency> FusedIterator for Breadthwise<'_, G> {}

/// Returns the number of steps on a shortest path from `source` to `target`.
///
/// Expands layers from `source` until one of them contains `target`. Directed graphs
/// are expanded along arc direction.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `source` - Where the path starts
/// * `target` - Where the path ends
///
/// # Returns
///
/// `Some(0)` when `source == target`, `None` when either node is absent or `target` is
/// not reachable.
///
/// # Examples
///
/// ```rust
/// use loopless::{distance, UndirectedGraph};
///
/// let graph = UndirectedGraph::new(1..=4, [(1, 2), (2, 3)])?;
///
/// assert_eq!(distance(&graph, &1, &3), Some(2));
/// assert_eq!(distance(&graph, &1, &4), None);
/// # Ok::<(), loopless::Error>(())
/// ```
pub fn distance<G: Adjacency>(graph: &G, source: &G::Node, target: &G::Node) -> Option<usize> {
    if !graph.contains_node(target) {
        return None;
    }

    Breadthwise::unordered(graph, source.clone()).position(|layer| layer.contains(target))
}
