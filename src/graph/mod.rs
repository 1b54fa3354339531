//! Graph data model for simple directed and undirected graphs.
//!
//! # Architecture
//!
//! The module is organized bottom-up:
//!
//! - **Node contract**: [`Node`] is any clonable, hashable, comparable-for-equality value
//! - **Links**: [`Arc`] (ordered) and [`Edge`] (unordered) implement the shared [`Link`]
//!   contract and reject self-loops at construction
//! - **Container**: [`Graph`] owns a node set and a link set and answers structural
//!   queries; [`DirectedGraph`] and [`UndirectedGraph`] fix the link type
//! - **Traits**: [`GraphBase`] and [`Adjacency`] let the [`algorithms`] walk any graph
//!   type, [`Reversible`] flips arcs and digraphs
//!
//! # Design Principles
//!
//! ## Immutable Values
//!
//! Graphs are built in one step from their nodes and links and never change afterwards.
//! Operations such as reversal or sub-graphing return a new graph.
//!
//! ## Equality by Content
//!
//! Two graphs are equal when their node sets and link sets are equal, regardless of the
//! order in which they were supplied.
//!
//! # Usage Examples
//!
//! ```rust
//! use loopless::graph::{algorithms::DepthFirstSearch, DirectedGraph};
//!
//! let graph = DirectedGraph::new(['A', 'B', 'C', 'D'], [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D')])?;
//!
//! let order: Vec<char> = DepthFirstSearch::new(&graph, 'A').collect();
//! assert_eq!(order, vec!['A', 'B', 'D', 'C']);
//! # Ok::<(), loopless::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All types in this module implement [`Send`] and [`Sync`] when their generic
//! parameters do.

mod arc;
mod container;
mod directed;
mod edge;
mod link;
mod node;
mod traits;
mod undirected;

pub mod algorithms;

pub use arc::Arc;
pub use container::{Graph, Neighborhood};
pub use directed::DirectedGraph;
pub use edge::Edge;
pub use link::Link;
pub use node::Node;
pub use traits::{Adjacency, GraphBase, Reversible};
pub use undirected::UndirectedGraph;
