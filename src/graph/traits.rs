//! Trait definitions for graph abstractions.
//!
//! The traversal algorithms in [`algorithms`](crate::graph::algorithms) are written
//! against these traits rather than against [`Graph`](crate::graph::Graph) itself, so
//! any structure that can enumerate its nodes and answer adjacency queries can be
//! walked.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Core properties: the node type, the order and node iteration
//! - [`Adjacency`] - The nodes a traversal may step to from a given node
//! - [`Reversible`] - Values that have an orientation which can be flipped
//!
//! All adjacency queries return iterators rather than collections so simple traversals
//! avoid intermediate allocations.

use crate::graph::Node;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use loopless::{GraphBase, UndirectedGraph};
///
/// let graph = UndirectedGraph::new([1, 2, 3], [(1, 2)])?;
/// assert_eq!(GraphBase::order(&graph), 3);
/// assert!(GraphBase::contains_node(&graph, &3));
/// # Ok::<(), loopless::Error>(())
/// ```
pub trait GraphBase {
    /// The vertex type of this graph.
    type Node: Node;

    /// Returns the number of nodes in the graph.
    fn order(&self) -> usize;

    /// Returns an iterator over all nodes of the graph.
    fn node_iter(&self) -> impl Iterator<Item = &Self::Node>;

    /// Returns `true` if `node` is a vertex of this graph.
    fn contains_node(&self, node: &Self::Node) -> bool;
}

/// Trait for graphs that can report the nodes reachable in one step from a node.
///
/// For directed graphs these are the successors (targets of outgoing arcs); for
/// undirected graphs these are all neighbors.
pub trait Adjacency: GraphBase {
    /// Returns an iterator over the nodes one step away from `node`.
    ///
    /// Nodes that are not part of the graph have no adjacent nodes.
    fn adjacent(&self, node: &Self::Node) -> impl Iterator<Item = &Self::Node>;
}

/// Values with an orientation that can be flipped.
///
/// Reversing twice must yield a value equal to the original.
pub trait Reversible {
    /// Returns a copy of `self` with the orientation reversed.
    #[must_use]
    fn reversed(&self) -> Self;
}
