//! Traversal algorithms over any graph implementing [`Adjacency`](crate::graph::Adjacency).
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`BreadthFirstSearch`] / [`bfs`] - Breadth-first search, one node per step
//! - [`DepthFirstSearch`] / [`dfs`] - Depth-first search with a selectable [`DepthFirstPolicy`]
//! - [`Reachable`] - Every reachable node once, order unspecified
//!
//! ## Layers and Distance
//!
//! - [`Breadthwise`] - Breadth-first expansion producing one frontier per step
//! - [`distance`] - Number of steps on a shortest path between two nodes
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Pending Work |
//! |-----------|-----------------|--------------|
//! | BFS | O(V + E) | FIFO queue with membership set |
//! | DFS, queue all unvisited | O(V + E) | Stack, may hold duplicates |
//! | DFS, queue only unqueued | O(V · E) worst case | Stack without duplicates |
//! | Reachable | O(V + E) | Deduplicating set |
//! | Breadthwise | O(V + E) | One frontier set |
//!
//! # Examples
//!
//! ```rust
//! use loopless::graph::{algorithms, UndirectedGraph};
//!
//! let graph = UndirectedGraph::new(1..=4, [(1, 2), (2, 3), (3, 4), (4, 1)])?;
//!
//! let order: Vec<u32> = algorithms::bfs(&graph, 1).collect();
//! assert_eq!(order, vec![1, 2, 4, 3]);
//!
//! let order: Vec<u32> = algorithms::dfs(&graph, 1).collect();
//! assert_eq!(order, vec![1, 2, 3, 4]);
//!
//! assert_eq!(algorithms::distance(&graph, &1, &3), Some(2));
//! # Ok::<(), loopless::Error>(())
//! ```

mod breadthwise;
mod queue;
mod traversal;

pub use breadthwise::{distance, Breadthwise};
pub use traversal::{bfs, dfs, BreadthFirstSearch, DepthFirstPolicy, DepthFirstSearch, Reachable};
