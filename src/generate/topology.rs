//! Canonical graph families.
//!
//! [`Topology`] names a family of graphs and [`Topology::edges`] lays its links over an
//! ordered node list. Placement is purely positional, so the same node list always
//! yields the same links:
//!
//! | Topology | Parameters | Links (undirected) | Degrees |
//! |----------|------------|--------------------|---------|
//! | `null` | | 0 | 0 |
//! | `path` | | n − 1 | 1 at the ends, 2 inside |
//! | `cycle` | | n | 2 |
//! | `star` | | n − 1 | n − 1 at the center, 1 elsewhere |
//! | `wheel` | | 2(n − 1) | n − 1 at the center, 3 elsewhere |
//! | `prism` | | 3n / 2 | 3 |
//! | `tree` | k | n − 1 | k + 1 inside, 1 at the leaves |
//! | `mesh` | m, n | 2mn − m − n | 2, 3 or 4 |
//! | `torus` | m, n | 2mn | 4 |
//! | `complete` | | n(n − 1) / 2 | n − 1 |
//!
//! Directed graphs receive one arc per listed link, except for `complete`, which
//! connects every ordered pair and therefore has n(n − 1) arcs.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};
use tracing::debug;

use crate::{
    graph::{Graph, Link, Node},
    Result,
};

/// A family of graphs with a fixed link layout.
///
/// Star and wheel graphs use the first node as their center. Prism graphs split the
/// node list into two equal halves, each forming a cycle, joined rung by rung. Tree
/// graphs attach the node at position `i` to the parent at `(i - 1) / k`. Mesh and torus
/// graphs read the node list as an `m` by `n` grid in row-major order; the torus wraps
/// around in both directions.
///
/// # Examples
///
/// ```rust
/// use loopless::{Topology, TopologyKind, UndirectedGraph};
///
/// let nodes: Vec<u32> = (1..=15).collect();
/// let torus = UndirectedGraph::generate(Topology::Torus { m: 3, n: 5 }, &nodes)?;
///
/// assert_eq!(torus.size(), 30);
/// assert!(torus.nodes().iter().all(|node| torus.degree(node) == 4));
/// assert_eq!(Topology::Torus { m: 3, n: 5 }.to_string(), "torus");
/// assert_eq!(Topology::Torus { m: 3, n: 5 }.kind(), TopologyKind::Torus);
/// # Ok::<(), loopless::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Topology {
    /// No links at all.
    Null,
    /// Consecutive nodes linked in a line.
    Path,
    /// A path whose last node links back to the first.
    Cycle,
    /// Every node linked to the first one.
    Star,
    /// A star whose outer nodes also form a cycle.
    Wheel,
    /// Two cycles of equal length joined by a perfect matching.
    Prism,
    /// A complete `k`-ary tree filled level by level.
    Tree {
        /// Number of children per interior node
        k: usize,
    },
    /// A rectangular grid.
    Mesh {
        /// Number of rows
        m: usize,
        /// Number of columns
        n: usize,
    },
    /// A rectangular grid whose rows and columns wrap around.
    Torus {
        /// Number of rows
        m: usize,
        /// Number of columns
        n: usize,
    },
    /// Every pair of nodes linked.
    Complete,
}

/// The family of a [`Topology`] without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum TopologyKind {
    Null,
    Path,
    Cycle,
    Star,
    Wheel,
    Prism,
    Tree,
    Mesh,
    Torus,
    Complete,
}

impl Topology {
    /// The families that are defined by the node count alone.
    #[must_use]
    pub fn simple_cases() -> [Topology; 7] {
        [
            Topology::Null,
            Topology::Path,
            Topology::Cycle,
            Topology::Star,
            Topology::Wheel,
            Topology::Prism,
            Topology::Complete,
        ]
    }

    /// The grid families for an `m` by `n` layout.
    #[must_use]
    pub fn parametric_cases(m: usize, n: usize) -> [Topology; 2] {
        [Topology::Mesh { m, n }, Topology::Torus { m, n }]
    }

    /// The lowercase name of the family.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The family without its parameters.
    #[must_use]
    pub fn kind(&self) -> TopologyKind {
        match self {
            Topology::Null => TopologyKind::Null,
            Topology::Path => TopologyKind::Path,
            Topology::Cycle => TopologyKind::Cycle,
            Topology::Star => TopologyKind::Star,
            Topology::Wheel => TopologyKind::Wheel,
            Topology::Prism => TopologyKind::Prism,
            Topology::Tree { .. } => TopologyKind::Tree,
            Topology::Mesh { .. } => TopologyKind::Mesh,
            Topology::Torus { .. } => TopologyKind::Torus,
            Topology::Complete => TopologyKind::Complete,
        }
    }

    /// Lays the links of this family over `nodes`.
    ///
    /// The result may contain the same link in both orientations (`complete`), or a
    /// self-loop for degenerate node counts (a one-node `cycle`); graph construction
    /// collapses or drops those.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The nodes in placement order
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTopology`] when
    /// - a prism gets fewer than six nodes or an odd number of nodes
    /// - a tree has a branching factor of zero
    /// - a mesh or torus gets a node count other than `m * n`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loopless::Topology;
    ///
    /// assert_eq!(Topology::Path.edges(&['a', 'b', 'c'])?, vec![('a', 'b'), ('b', 'c')]);
    /// assert!(Topology::Prism.edges(&[1, 2, 3, 4, 5, 6, 7]).is_err());
    /// # Ok::<(), loopless::Error>(())
    /// ```
    pub fn edges<N: Clone>(&self, nodes: &[N]) -> Result<Vec<(N, N)>> {
        let count = nodes.len();
        let pair = |a: usize, b: usize| (nodes[a].clone(), nodes[b].clone());

        let edges = match *self {
            Topology::Null => Vec::new(),
            Topology::Path => (1..count).map(|i| pair(i - 1, i)).collect(),
            Topology::Cycle => (0..count).map(|i| pair(i, (i + 1) % count)).collect(),
            Topology::Star => (1..count).map(|i| pair(0, i)).collect(),
            Topology::Wheel => {
                let rim = count.saturating_sub(1);
                (1..count)
                    .map(|i| pair(0, i))
                    .chain((0..rim).map(|i| pair(1 + i, 1 + (i + 1) % rim)))
                    .collect()
            }
            Topology::Prism => {
                if count < 6 {
                    return Err(topology_error!(
                        self.name(),
                        "needs at least 6 nodes, got {}",
                        count
                    ));
                }
                if count % 2 != 0 {
                    return Err(topology_error!(
                        self.name(),
                        "needs an even number of nodes, got {}",
                        count
                    ));
                }

                let half = count / 2;
                (0..half)
                    .flat_map(|i| {
                        let next = (i + 1) % half;
                        [
                            pair(i, i + half),
                            pair(i, next),
                            pair(i + half, next + half),
                        ]
                    })
                    .collect()
            }
            Topology::Tree { k } => {
                if k == 0 {
                    return Err(topology_error!(
                        self.name(),
                        "branching factor must be positive"
                    ));
                }
                (1..count).map(|i| pair((i - 1) / k, i)).collect()
            }
            Topology::Mesh { m, n } => {
                self.check_grid(m, n, count)?;

                let mut edges = Vec::with_capacity((2 * m * n).saturating_sub(m + n));
                for row in 0..m {
                    for col in 0..n {
                        let here = row * n + col;
                        if col + 1 < n {
                            edges.push(pair(here, here + 1));
                        }
                        if row + 1 < m {
                            edges.push(pair(here, here + n));
                        }
                    }
                }
                edges
            }
            Topology::Torus { m, n } => {
                self.check_grid(m, n, count)?;

                let mut edges = Vec::with_capacity(2 * m * n);
                for row in 0..m {
                    for col in 0..n {
                        let here = row * n + col;
                        edges.push(pair(here, row * n + (col + 1) % n));
                        edges.push(pair(here, (row + 1) % m * n + col));
                    }
                }
                edges
            }
            Topology::Complete => (0..count)
                .flat_map(|i| (0..count).filter(move |j| *j != i).map(move |j| pair(i, j)))
                .collect(),
        };

        Ok(edges)
    }

    fn check_grid(&self, m: usize, n: usize, count: usize) -> Result<()> {
        if m.checked_mul(n) == Some(count) {
            Ok(())
        } else {
            Err(topology_error!(
                self.name(),
                "{} x {} grid does not fit {} nodes",
                m,
                n,
                count
            ))
        }
    }
}

impl<N: Node, L: Link<N>> Graph<N, L> {
    /// Builds the graph of `topology` over `nodes`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTopology`] when the parameters of `topology` do not
    /// fit the node list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loopless::{DirectedGraph, Topology};
    ///
    /// let nodes: Vec<u32> = (1..=20).collect();
    /// let complete = DirectedGraph::generate(Topology::Complete, &nodes)?;
    ///
    /// assert_eq!(complete.size(), 20 * 19);
    /// # Ok::<(), loopless::Error>(())
    /// ```
    pub fn generate(topology: Topology, nodes: &[N]) -> Result<Self> {
        let pairs = topology.edges(nodes)?;
        let graph = Self::new(nodes.iter().cloned(), pairs)?;

        debug!(
            %topology,
            order = graph.order(),
            size = graph.size(),
            directed = L::DIRECTED,
            "generated topology"
        );
        Ok(graph)
    }
}
