//! # loopless Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the loopless library. Import it to build, generate and traverse graphs without
//! naming individual modules.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all loopless operations
pub use crate::Error;

/// The result type used throughout loopless
pub use crate::Result;

/// Configuration for random graph generation
pub use crate::RandomGraphConfig;

// ================================================================================================
// Graph Data Model
// ================================================================================================

/// Node and link contracts
pub use crate::graph::{Arc, Edge, Link, Node};

/// Graph containers
pub use crate::graph::{DirectedGraph, Graph, Neighborhood, UndirectedGraph};

/// Traits implemented by graphs and links
pub use crate::graph::{Adjacency, GraphBase, Reversible};

// ================================================================================================
// Traversal
// ================================================================================================

/// Node-by-node traversal iterators
pub use crate::graph::algorithms::{
    BreadthFirstSearch, DepthFirstPolicy, DepthFirstSearch, Reachable,
};

/// Layer-by-layer expansion and shortest-path distance
pub use crate::graph::algorithms::{distance, Breadthwise};

// ================================================================================================
// Generation
// ================================================================================================

/// Canonical graph families
pub use crate::generate::topology::{Topology, TopologyKind};

/// Node lists for graphs requested by size
pub use crate::generate::naming::{lettered_nodes, numbered_nodes};
