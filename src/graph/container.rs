//! Generic graph container shared by directed and undirected graphs.
//!
//! This module provides [`Graph`], an immutable value holding a set of nodes and a set
//! of links. The link type decides whether the graph is directed ([`Arc`](crate::Arc))
//! or undirected ([`Edge`](crate::Edge)); everything else, from construction to degree
//! and neighbor queries, is shared.
//!
//! # Memory Layout
//!
//! Besides the node and link sets the container keeps two adjacency maps built once at
//! construction time:
//!
//! - `outgoing` maps each node to the nodes it links to
//! - `incoming` maps each node to the nodes linking to it
//!
//! Undirected edges are recorded in both orientations, so the two maps coincide for
//! undirected graphs. Every node has an entry in both maps, isolated nodes included.
//!
//! # Ordering
//!
//! All sets are [`IndexSet`]s. Equality is set equality and ignores insertion order,
//! while iteration follows insertion order, which keeps seeded random operations and
//! unordered traversals reproducible.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::{
    graph::{
        algorithms,
        traits::{Adjacency, GraphBase},
        Link, Node,
    },
    Error, Result,
};

/// Selects which neighborhood of a node [`Graph::neighborhood`] computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Neighborhood {
    /// The node itself, its incident links and their other endpoints.
    #[default]
    Closed,
    /// The neighborhood without the node itself. Not supported.
    Open,
}

/// An immutable simple graph over nodes of type `N` connected by links of type `L`.
///
/// Use the [`DirectedGraph`](crate::DirectedGraph) and
/// [`UndirectedGraph`](crate::UndirectedGraph) aliases rather than naming the link type.
///
/// # Invariants
///
/// - Nodes and links are deduplicated by their equality rules; `(u,v)` and `(v,u)`
///   collapse into one undirected edge but remain two arcs
/// - No link is a self-loop
/// - Every endpoint of every link is a node of the graph
///
/// A graph is never modified after construction. Reversal, sub-graphing and generation
/// all produce a new value.
///
/// # Thread Safety
///
/// `Graph<N, L>` is [`Send`] and [`Sync`] when `N` and `L` are. Any number of iterators
/// may walk the same graph concurrently.
///
/// # Examples
///
/// ```rust
/// use loopless::UndirectedGraph;
///
/// let graph = UndirectedGraph::new([1, 2, 3, 3], [(1, 2), (2, 3), (3, 1), (3, 1), (1, 3), (2, 2)])?;
///
/// assert_eq!(graph.order(), 3);
/// assert_eq!(graph.size(), 3);
/// assert_eq!(graph.degree(&1), 2);
/// # Ok::<(), loopless::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, L> {
    /// Vertex set
    nodes: IndexSet<N>,
    /// Link set
    edges: IndexSet<L>,
    /// Targets of the links leaving each node
    outgoing: IndexMap<N, IndexSet<N>>,
    /// Sources of the links entering each node
    incoming: IndexMap<N, IndexSet<N>>,
}

impl<N: Node, L: Link<N>> Default for Graph<N, L> {
    fn default() -> Self {
        Self::from_parts(IndexSet::new(), IndexSet::new())
    }
}

impl<N: Node, L: Link<N>> Graph<N, L> {
    /// Builds a graph from a node list and a list of endpoint pairs.
    ///
    /// Repeated nodes and repeated links collapse. Pairs whose endpoints are equal are
    /// self-loops; they are dropped without an error.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The vertices of the graph
    /// * `pairs` - Endpoint pairs, each converted through [`Link::try_new`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEndpoint`] if a pair references a node that is not part of
    /// `nodes`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loopless::DirectedGraph;
    ///
    /// let graph = DirectedGraph::new([1, 2, 3, 4, 4, 4], [(1, 2), (2, 1), (3, 1), (1, 3), (4, 1), (1, 4), (1, 4)])?;
    /// assert_eq!(graph.order(), 4);
    /// assert_eq!(graph.size(), 6);
    ///
    /// assert!(DirectedGraph::new([1, 2], [(1, 3)]).is_err());
    /// # Ok::<(), loopless::Error>(())
    /// ```
    pub fn new<I, P>(nodes: I, pairs: P) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        P: IntoIterator<Item = (N, N)>,
    {
        let nodes: IndexSet<N> = nodes.into_iter().collect();
        let mut edges = IndexSet::new();
        let mut dropped = 0usize;

        for (u, v) in pairs {
            for endpoint in [&u, &v] {
                if !nodes.contains(endpoint) {
                    return Err(Error::MissingEndpoint(format!("{endpoint:?}")));
                }
            }

            match L::try_new(u, v) {
                Some(link) => {
                    edges.insert(link);
                }
                None => dropped += 1,
            }
        }

        debug!(
            order = nodes.len(),
            size = edges.len(),
            dropped_self_loops = dropped,
            directed = L::DIRECTED,
            "built graph"
        );
        Ok(Self::from_parts(nodes, edges))
    }

    /// Builds a graph from an explicit node set and link set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEndpoint`] if a link has an endpoint outside `nodes`.
    pub fn from_sets(nodes: IndexSet<N>, edges: IndexSet<L>) -> Result<Self> {
        if let Some(missing) = edges
            .iter()
            .flat_map(|link| [link.u(), link.v()])
            .find(|endpoint| !nodes.contains(*endpoint))
        {
            return Err(Error::MissingEndpoint(format!("{missing:?}")));
        }

        Ok(Self::from_parts(nodes, edges))
    }

    /// Assembles a graph whose links are already known to satisfy the endpoint invariant.
    pub(crate) fn from_parts(nodes: IndexSet<N>, edges: IndexSet<L>) -> Self {
        let mut outgoing: IndexMap<N, IndexSet<N>> = nodes
            .iter()
            .map(|node| (node.clone(), IndexSet::new()))
            .collect();
        let mut incoming = outgoing.clone();

        for link in &edges {
            let (u, v) = link.endpoints();
            connect(&mut outgoing, &mut incoming, u, v);
            if !L::DIRECTED {
                connect(&mut outgoing, &mut incoming, v, u);
            }
        }

        Graph {
            nodes,
            edges,
            outgoing,
            incoming,
        }
    }

    /// Targets of the links leaving `node`.
    pub(crate) fn targets(&self, node: &N) -> impl Iterator<Item = &N> {
        self.outgoing.get(node).into_iter().flatten()
    }

    /// Sources of the links entering `node`.
    pub(crate) fn sources(&self, node: &N) -> impl Iterator<Item = &N> {
        self.incoming.get(node).into_iter().flatten()
    }

    /// Number of nodes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links.
    #[must_use]
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node set, in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &IndexSet<N> {
        &self.nodes
    }

    /// The link set, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &IndexSet<L> {
        &self.edges
    }

    /// Returns `true` if `node` is a vertex of this graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Returns `true` if a link joins `u` and `v`.
    ///
    /// For directed graphs the arc must run from `u` to `v`.
    #[must_use]
    pub fn contains_edge(&self, u: &N, v: &N) -> bool {
        self.outgoing
            .get(u)
            .is_some_and(|targets| targets.contains(v))
    }

    /// Counts the links incident with `node`.
    ///
    /// For directed graphs this is the sum of in-degree and out-degree. Nodes that are
    /// not part of the graph have degree zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loopless::{DirectedGraph, UndirectedGraph};
    ///
    /// let pairs = [(1, 2), (1, 3), (4, 1), (4, 5)];
    /// assert_eq!(UndirectedGraph::new(1..=5, pairs)?.degree(&1), 3);
    /// assert_eq!(DirectedGraph::new(1..=5, pairs)?.degree(&1), 3);
    /// # Ok::<(), loopless::Error>(())
    /// ```
    #[must_use]
    pub fn degree(&self, node: &N) -> usize {
        let outgoing = self.outgoing.get(node).map_or(0, IndexSet::len);
        if L::DIRECTED {
            outgoing + self.incoming.get(node).map_or(0, IndexSet::len)
        } else {
            outgoing
        }
    }

    /// Returns every node joined to `node` by a link, regardless of its direction.
    ///
    /// The result never contains `node` itself.
    #[must_use]
    pub fn neighbors(&self, node: &N) -> IndexSet<N> {
        self.outgoing
            .get(node)
            .into_iter()
            .chain(self.incoming.get(node))
            .flatten()
            .cloned()
            .collect()
    }

    /// Returns the links incident with `node`.
    #[must_use]
    pub fn incident_edges(&self, node: &N) -> IndexSet<L> {
        self.edges
            .iter()
            .filter(|link| link.is_incident(node))
            .cloned()
            .collect()
    }

    /// Returns the nodes touched by at least one link.
    #[must_use]
    pub fn edge_nodes(&self) -> IndexSet<N> {
        self.edges
            .iter()
            .flat_map(|link| [link.u(), link.v()])
            .cloned()
            .collect()
    }

    /// Computes the neighborhood of `node` as a new graph.
    ///
    /// The closed neighborhood holds `node`, every link incident with it and the other
    /// endpoints of those links. Links between two neighbors are not included.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSupported`] for [`Neighborhood::Open`]
    /// - [`Error::GraphError`] if `node` is not part of the graph
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loopless::{Neighborhood, UndirectedGraph};
    ///
    /// let graph = UndirectedGraph::new(1..=4, [(1, 2), (2, 3), (1, 3), (3, 4)])?;
    /// let closed = graph.neighborhood(&1, Neighborhood::Closed)?;
    ///
    /// assert_eq!(closed.order(), 3);
    /// assert_eq!(closed.size(), 2);
    /// assert!(graph.neighborhood(&1, Neighborhood::Open).is_err());
    /// # Ok::<(), loopless::Error>(())
    /// ```
    pub fn neighborhood(&self, node: &N, kind: Neighborhood) -> Result<Self> {
        if kind == Neighborhood::Open {
            return Err(Error::NotSupported("open neighborhood"));
        }
        if !self.contains_node(node) {
            return Err(Error::GraphError(format!(
                "{node:?} is not a node of the graph"
            )));
        }

        let edges = self.incident_edges(node);
        let mut nodes = IndexSet::with_capacity(edges.len() + 1);
        nodes.insert(node.clone());
        for link in &edges {
            nodes.insert(link.u().clone());
            nodes.insert(link.v().clone());
        }

        Ok(Self::from_parts(nodes, edges))
    }

    /// Returns the subgraph induced by `nodes`.
    ///
    /// Nodes that are not part of this graph are ignored. Every link whose two endpoints
    /// both belong to the selection is kept.
    #[must_use]
    pub fn induced_subgraph<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let nodes: IndexSet<N> = nodes
            .into_iter()
            .filter(|node| self.contains_node(node))
            .collect();
        let edges: IndexSet<L> = self
            .edges
            .iter()
            .filter(|link| nodes.contains(link.u()) && nodes.contains(link.v()))
            .cloned()
            .collect();

        Self::from_parts(nodes, edges)
    }

    /// Number of link steps on a shortest path from `source` to `target`.
    ///
    /// Directed graphs follow arc direction. See [`algorithms::distance`].
    ///
    /// # Returns
    ///
    /// `None` if `target` cannot be reached from `source` or either node is absent.
    #[must_use]
    pub fn distance(&self, source: &N, target: &N) -> Option<usize> {
        algorithms::distance(self, source, target)
    }
}

fn connect<N: Node>(
    outgoing: &mut IndexMap<N, IndexSet<N>>,
    incoming: &mut IndexMap<N, IndexSet<N>>,
    u: &N,
    v: &N,
) {
    if let Some(targets) = outgoing.get_mut(u) {
        targets.insert(v.clone());
    }
    if let Some(sources) = incoming.get_mut(v) {
        sources.insert(u.clone());
    }
}

impl<N: Node, L: Link<N>> PartialEq for Graph<N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl<N: Node, L: Link<N>> Eq for Graph<N, L> {}

impl<N: Node, L: Link<N> + fmt::Display> fmt::Display for Graph<N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nodes: [")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node:?}")?;
        }
        writeln!(f, "]")?;

        write!(f, "Edges: [")?;
        for (i, link) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{link}")?;
        }
        write!(f, "]")
    }
}

impl<N: Node, L: Link<N>> GraphBase for Graph<N, L> {
    type Node = N;

    fn order(&self) -> usize {
        self.nodes.len()
    }

    fn node_iter(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }
}

impl<N: Node, L: Link<N>> Adjacency for Graph<N, L> {
    fn adjacent(&self, node: &N) -> impl Iterator<Item = &N> {
        self.targets(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Arc, DirectedGraph, Edge, UndirectedGraph};

    fn create_incidence_pairs() -> Vec<(u32, u32)> {
        vec![(1, 2), (1, 3), (4, 1), (4, 5)]
    }

    #[test]
    fn test_default_is_empty() {
        let graph: UndirectedGraph<u32> = Graph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_deduplication() {
        let pairs = [(1, 2), (2, 3), (3, 1), (3, 1), (1, 3)];

        let undirected = UndirectedGraph::new([1, 2, 3, 3], pairs).unwrap();
        assert_eq!(undirected.order(), 3);
        assert_eq!(undirected.size(), 3);

        let directed = DirectedGraph::new([1, 2, 3, 3], pairs).unwrap();
        assert_eq!(directed.order(), 3);
        assert_eq!(directed.size(), 4);
    }

    #[test]
    fn test_self_loops_are_dropped() {
        let pairs = [(1, 2), (2, 2), (2, 3)];
        let graph = UndirectedGraph::new([1, 2, 3], pairs).unwrap();

        assert_eq!(graph.size(), pairs.len() - 1);
        assert!(!graph.contains_edge(&2, &2));
        assert_eq!(graph.degree(&2), 2);
    }

    #[test]
    fn test_missing_endpoint() {
        let result = UndirectedGraph::new([1, 2], [(1, 2), (2, 9)]);
        assert!(matches!(result, Err(Error::MissingEndpoint(ref node)) if node == "9"));
    }

    #[test]
    fn test_from_sets() {
        let nodes: IndexSet<u32> = [1, 2, 3].into_iter().collect();
        let edges: IndexSet<Edge<u32>> = [(1, 2), (3, 2)]
            .into_iter()
            .filter_map(|(u, v)| Edge::try_new(u, v))
            .collect();

        let graph = Graph::from_sets(nodes.clone(), edges).unwrap();
        assert_eq!(graph.size(), 2);

        let stray: IndexSet<Edge<u32>> = Edge::try_new(1, 4).into_iter().collect();
        assert!(Graph::from_sets(nodes, stray).is_err());
    }

    #[test]
    fn test_undirected_incidence() {
        let graph = UndirectedGraph::new(1..=5, create_incidence_pairs()).unwrap();

        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.degree(&1), 3);
        assert_eq!(graph.degree(&5), 1);
        assert_eq!(graph.degree(&42), 0);

        let expected: IndexSet<u32> = [2, 3, 4].into_iter().collect();
        assert_eq!(graph.neighbors(&1), expected);
        assert_eq!(graph.incident_edges(&1).len(), 3);
    }

    #[test]
    fn test_directed_incidence() {
        let graph = DirectedGraph::new(1..=5, create_incidence_pairs()).unwrap();

        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.degree(&1), 3);

        let expected: IndexSet<u32> = [2, 3, 4].into_iter().collect();
        assert_eq!(graph.neighbors(&1), expected);
        assert!(graph.contains_edge(&4, &1));
        assert!(!graph.contains_edge(&1, &4));
    }

    #[test]
    fn test_edge_nodes_skip_isolated() {
        let graph = UndirectedGraph::new(1..=6, create_incidence_pairs()).unwrap();
        let touched = graph.edge_nodes();

        assert_eq!(touched.len(), 5);
        assert!(!touched.contains(&6));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = UndirectedGraph::new([1, 2, 3], [(1, 2), (2, 3)]).unwrap();
        let b = UndirectedGraph::new([3, 2, 1], [(3, 2), (2, 1)]).unwrap();
        assert_eq!(a, b);

        let c: Graph<u32, Arc<u32>> = DirectedGraph::new([1, 2, 3], [(1, 2), (2, 3)]).unwrap();
        let d = DirectedGraph::new([1, 2, 3], [(2, 1), (3, 2)]).unwrap();
        assert_ne!(c, d);
    }

    #[test]
    fn test_closed_neighborhood() {
        let graph = UndirectedGraph::new(1..=5, [(1, 2), (2, 3), (1, 3), (3, 4)]).unwrap();

        let around_three = graph.neighborhood(&3, Neighborhood::Closed).unwrap();
        assert_eq!(around_three.order(), 4);
        assert_eq!(around_three.size(), 3);
        assert!(!around_three.contains_edge(&1, &2));

        let isolated = graph.neighborhood(&5, Neighborhood::Closed).unwrap();
        assert_eq!(isolated.order(), 1);
        assert_eq!(isolated.size(), 0);
    }

    #[test]
    fn test_neighborhood_errors() {
        let graph = UndirectedGraph::new(1..=3, [(1, 2)]).unwrap();

        assert!(matches!(
            graph.neighborhood(&1, Neighborhood::Open),
            Err(Error::NotSupported(_))
        ));
        assert!(matches!(
            graph.neighborhood(&9, Neighborhood::Closed),
            Err(Error::GraphError(_))
        ));
    }

    #[test]
    fn test_induced_subgraph() {
        let graph = UndirectedGraph::new(1..=4, [(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
        let sub = graph.induced_subgraph([1, 2, 3, 99]);

        assert_eq!(sub.order(), 3);
        assert_eq!(sub.size(), 2);
        assert!(sub.contains_edge(&1, &2));
        assert!(!sub.contains_edge(&4, &1));
    }

    #[test]
    fn test_display() {
        let graph = UndirectedGraph::new([1, 2, 3], [(1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.to_string(), "Nodes: [1, 2, 3]\nEdges: [(1,2), (2,3)]");

        let digraph = DirectedGraph::new(['a', 'b'], [('b', 'a')]).unwrap();
        assert_eq!(digraph.to_string(), "Nodes: ['a', 'b']\nEdges: [('b'->'a')]");
    }

    #[test]
    fn test_adjacency_follows_direction() {
        let graph = DirectedGraph::new([1, 2, 3], [(1, 2), (3, 1)]).unwrap();

        let adjacent: Vec<_> = graph.adjacent(&1).copied().collect();
        assert_eq!(adjacent, vec![2]);
        assert_eq!(graph.adjacent(&9).count(), 0);
    }
}
