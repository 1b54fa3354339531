//! Directed graphs.
//!
//! [`DirectedGraph`] is a [`Graph`] whose links are [`Arc`]s. On top of the shared
//! container queries it distinguishes the two ends of each arc: in-degree and out-degree,
//! successors and predecessors, and whole-graph reversal.

use crate::graph::{Arc, Graph, Link, Node, Reversible};

/// A simple directed graph.
///
/// # Examples
///
/// ```rust
/// use loopless::{DirectedGraph, Reversible};
///
/// let clockwise = DirectedGraph::new(1..=4, [(1, 2), (2, 3), (3, 4), (4, 1)])?;
/// let anticlockwise = DirectedGraph::new(1..=4, [(2, 1), (3, 2), (4, 3), (1, 4)])?;
///
/// assert_eq!(clockwise, anticlockwise.reversed());
/// assert_eq!(clockwise.out_degree(&1), 1);
/// assert_eq!(clockwise.in_degree(&1), 1);
/// # Ok::<(), loopless::Error>(())
/// ```
pub type DirectedGraph<N> = Graph<N, Arc<N>>;

impl<N: Node> Graph<N, Arc<N>> {
    /// Counts the arcs ending at `node`.
    #[must_use]
    pub fn in_degree(&self, node: &N) -> usize {
        self.predecessors(node).count()
    }

    /// Counts the arcs starting at `node`.
    #[must_use]
    pub fn out_degree(&self, node: &N) -> usize {
        self.successors(node).count()
    }

    /// Returns the targets of the arcs leaving `node`.
    pub fn successors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.targets(node)
    }

    /// Returns the sources of the arcs entering `node`.
    pub fn predecessors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.sources(node)
    }

    /// Returns the arcs whose source is `node`.
    pub fn arcs_from<'a, 'n>(&'a self, node: &'n N) -> impl Iterator<Item = &'a Arc<N>> + 'n
    where
        'a: 'n,
    {
        self.edges().iter().filter(move |arc| arc.u() == node)
    }

    /// Returns the arcs whose destination is `node`.
    pub fn arcs_into<'a, 'n>(&'a self, node: &'n N) -> impl Iterator<Item = &'a Arc<N>> + 'n
    where
        'a: 'n,
    {
        self.edges().iter().filter(move |arc| arc.v() == node)
    }
}

impl<N: Node> Reversible for Graph<N, Arc<N>> {
    /// Returns a graph over the same nodes with every arc pointing the other way.
    fn reversed(&self) -> Self {
        let arcs = self.edges().iter().map(Reversible::reversed).collect();
        Graph::from_parts(self.nodes().clone(), arcs)
    }
}
