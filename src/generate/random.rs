//! Erdős–Rényi random graphs and random induced subgraphs.
//!
//! Random construction draws one uniform `[0, 1)` value per candidate link and keeps
//! the link when the value falls below the requested probability. Undirected graphs
//! consider each unordered pair of distinct nodes once; directed graphs consider both
//! orientations separately.

use indexmap::IndexSet;
use rand::Rng;
use tracing::debug;

use crate::{
    generate::{
        config::{check_probability, RandomGraphConfig},
        naming::{lettered_nodes, numbered_nodes},
    },
    graph::{Graph, Link, Node},
    utils::sample::random_subset,
    Result,
};

impl<N: Node, L: Link<N>> Graph<N, L> {
    /// Creates an Erdős–Rényi random graph over `nodes`.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The vertices; duplicates collapse
    /// * `probability` - Chance in `[0, 1]` that a candidate link is included
    /// * `rng` - Source of randomness
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidProbability`] when `probability` is outside `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loopless::UndirectedGraph;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    ///
    /// let empty = UndirectedGraph::random(1..=10, 0.0, &mut rng)?;
    /// assert_eq!(empty.size(), 0);
    ///
    /// let complete = UndirectedGraph::random(1..=10, 1.0, &mut rng)?;
    /// assert_eq!(complete.size(), 45);
    /// # Ok::<(), loopless::Error>(())
    /// ```
    pub fn random<I, R>(nodes: I, probability: f64, rng: &mut R) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        R: Rng + ?Sized,
    {
        check_probability(probability)?;

        let nodes: IndexSet<N> = nodes.into_iter().collect();
        let count = nodes.len();
        let mut edges = IndexSet::new();

        for (i, u) in nodes.iter().enumerate() {
            let first = if L::DIRECTED { 0 } else { i + 1 };
            for j in (first..count).filter(|j| *j != i) {
                if rng.gen::<f64>() >= probability {
                    continue;
                }
                if let Some(link) = L::try_new(u.clone(), nodes[j].clone()) {
                    edges.insert(link);
                }
            }
        }

        debug!(
            probability,
            order = count,
            size = edges.len(),
            directed = L::DIRECTED,
            "generated random graph"
        );
        Ok(Self::from_parts(nodes, edges))
    }

    /// Creates an Erdős–Rényi random graph with the probability and random source of
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidProbability`] when the configured probability is
    /// outside `[0, 1]`.
    pub fn random_with<I>(nodes: I, config: &RandomGraphConfig) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
    {
        config.validate()?;
        let mut rng = config.rng();
        Self::random(nodes, config.probability, &mut rng)
    }

    /// Returns a random induced subgraph.
    ///
    /// Picks `order` nodes uniformly at random (all nodes when `order` exceeds the order
    /// of the graph, a random number of nodes when `order` is `None`) and keeps every
    /// link between two picked nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loopless::{Topology, UndirectedGraph};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let nodes: Vec<u32> = (1..=8).collect();
    /// let graph = UndirectedGraph::generate(Topology::Complete, &nodes)?;
    /// let sub = graph.random_subgraph(Some(4), &mut ChaCha8Rng::seed_from_u64(1));
    ///
    /// assert_eq!(sub.order(), 4);
    /// assert_eq!(sub.size(), 6);
    /// # Ok::<(), loopless::Error>(())
    /// ```
    #[must_use]
    pub fn random_subgraph<R: Rng + ?Sized>(&self, order: Option<usize>, rng: &mut R) -> Self {
        let picked = random_subset(self.nodes().iter().cloned(), order, rng);
        let subgraph = self.induced_subgraph(picked);

        debug!(
            requested = ?order,
            order = subgraph.order(),
            size = subgraph.size(),
            "sampled random subgraph"
        );
        subgraph
    }
}

impl<L: Link<usize>> Graph<usize, L> {
    /// Creates an Erdős–Rényi random graph over the nodes `1..=count`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidProbability`] when `probability` is outside `[0, 1]`.
    pub fn random_numbered<R: Rng + ?Sized>(
        count: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        Self::random(numbered_nodes(count), probability, rng)
    }
}

impl<L: Link<String>> Graph<String, L> {
    /// Creates an Erdős–Rényi random graph over `count` letter-coded nodes.
    ///
    /// See [`lettered_nodes`] for the naming scheme.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidProbability`] when `probability` is outside `[0, 1]`.
    pub fn random_lettered<R: Rng + ?Sized>(
        count: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        Self::random(lettered_nodes(count), probability, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{
        graph::{DirectedGraph, UndirectedGraph},
        Error,
    };

    #[test]
    fn test_probability_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let directed = DirectedGraph::random(1..=6, 1.0, &mut rng).unwrap();
        assert_eq!(directed.size(), 30);

        let undirected = UndirectedGraph::random(1..=6, 1.0, &mut rng).unwrap();
        assert_eq!(undirected.size(), 15);

        let empty = DirectedGraph::random(1..=6, 0.0, &mut rng).unwrap();
        assert_eq!(empty.size(), 0);
        assert_eq!(empty.order(), 6);
    }

    #[test]
    fn test_invalid_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert!(matches!(
            UndirectedGraph::random(1..=3, 1.5, &mut rng),
            Err(Error::InvalidProbability(_))
        ));
        assert!(UndirectedGraph::random(1..=3, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = RandomGraphConfig::default().with_seed(2024);

        let a = UndirectedGraph::random_with(1..=30, &config).unwrap();
        let b = UndirectedGraph::random_with(1..=30, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_numbered_and_lettered() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let numbered = UndirectedGraph::random_numbered(12, 0.3, &mut rng).unwrap();
        assert_eq!(numbered.order(), 12);
        assert!(numbered.contains_node(&12));

        let lettered = DirectedGraph::random_lettered(30, 0.3, &mut rng).unwrap();
        assert_eq!(lettered.order(), 30);
        assert!(lettered.contains_node(&String::from("AA")));
    }

    #[test]
    fn test_random_subgraph_is_induced() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let graph = UndirectedGraph::random(1..=25, 0.4, &mut rng).unwrap();

        for order in [None, Some(0), Some(10), Some(100)] {
            let sub = graph.random_subgraph(order, &mut rng);

            assert!(sub.nodes().is_subset(graph.nodes()));
            assert!(sub.edges().is_subset(graph.edges()));
            for edge in graph.edges() {
                let inside = sub.contains_node(edge.u()) && sub.contains_node(edge.v());
                assert_eq!(inside, sub.edges().contains(edge));
            }
        }

        assert_eq!(graph.random_subgraph(Some(100), &mut rng), graph);
    }
}
