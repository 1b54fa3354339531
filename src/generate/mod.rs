//! Graph generation.
//!
//! # Key Components
//!
//! - [`topology`] - The [`Topology`](topology::Topology) catalogue of canonical graph
//!   families and `Graph::generate`
//! - [`random`] - Erdős–Rényi graphs (`Graph::random`, `Graph::random_with`,
//!   `Graph::random_numbered`, `Graph::random_lettered`) and `Graph::random_subgraph`
//! - [`naming`] - Node lists for graphs requested by size
//! - [`config`] - [`RandomGraphConfig`](config::RandomGraphConfig), the probability and
//!   seed of random generation
//!
//! # Examples
//!
//! ```rust
//! use loopless::{RandomGraphConfig, UndirectedGraph};
//!
//! let config = RandomGraphConfig::sparse().with_seed(7);
//! let graph = UndirectedGraph::random_with(loopless::numbered_nodes(50), &config)?;
//!
//! assert_eq!(graph.order(), 50);
//! assert!(graph.size() <= 50 * 49 / 2);
//! # Ok::<(), loopless::Error>(())
//! ```

pub mod config;
pub mod naming;
pub mod random;
pub mod topology;
