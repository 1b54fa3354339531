//! Undirected graphs.

use crate::graph::{Edge, Graph};

/// A simple undirected graph.
///
/// Edges are unordered, so `(u,v)` and `(v,u)` describe the same edge and every
/// adjacency query is symmetric.
///
/// # Examples
///
/// ```rust
/// use loopless::UndirectedGraph;
///
/// let graph = UndirectedGraph::new(['a', 'b', 'c'], [('a', 'b'), ('b', 'a'), ('c', 'b')])?;
///
/// assert_eq!(graph.size(), 2);
/// assert!(graph.contains_edge(&'b', &'c'));
/// # Ok::<(), loopless::Error>(())
/// ```
pub type UndirectedGraph<N> = Graph<N, Edge<N>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Adjacency;

    #[test]
    fn test_symmetric_adjacency() {
        let graph = UndirectedGraph::new(1..=3, [(1, 2), (3, 2)]).unwrap();

        assert!(graph.contains_edge(&1, &2));
        assert!(graph.contains_edge(&2, &1));
        assert_eq!(graph.adjacent(&2).count(), 2);
        assert_eq!(graph.adjacent(&3).copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_degree_matches_incident_edges() {
        let graph = UndirectedGraph::new(1..=4, [(1, 2), (1, 3), (1, 4), (2, 3)]).unwrap();

        for node in graph.nodes() {
            assert_eq!(graph.degree(node), graph.incident_edges(node).len());
        }
        assert_eq!(graph.degree(&1), 3);
        assert_eq!(graph.degree(&4), 1);
    }

    #[test]
    fn test_string_nodes() {
        let names = ["A", "B", "C"].map(String::from);
        let graph = UndirectedGraph::new(
            names.clone(),
            [(names[0].clone(), names[1].clone())],
        )
        .unwrap();

        assert_eq!(graph.order(), 3);
        assert_eq!(graph.neighbors(&names[1]).len(), 1);
    }
}
