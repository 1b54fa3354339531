// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # loopless
//!
//! [![Crates.io](https://img.shields.io/crates/v/loopless.svg)](https://crates.io/crates/loopless)
//! [![Documentation](https://docs.rs/loopless/badge.svg)](https://docs.rs/loopless)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/loopless/blob/main/LICENSE-APACHE)
//!
//! Simple graphs and digraphs over arbitrary hashable node values. `loopless` models
//! directed and undirected graphs as immutable values, generates the canonical topology
//! families and Erdős–Rényi random graphs, and walks them with lazy breadth-first,
//! depth-first and frontier iterators.
//!
//! ## Features
//!
//! - **Strictly simple graphs** - Self-loops are rejected when an edge is built and silently
//!   dropped during graph construction; duplicate nodes and edges collapse
//! - **Order-aware links** - [`Arc`] compares by orientation, [`Edge`] ignores it, both for
//!   equality and hashing
//! - **Topology generators** - Path, cycle, star, wheel, prism, tree, mesh, torus and complete
//!   graphs with exact edge-count guarantees
//! - **Reproducible randomness** - Every random operation takes an injected [`rand::Rng`]
//! - **Lazy traversal** - Pull-based iterators that never mutate the graph
//!
//! ## Quick Start
//!
//! ```rust
//! use loopless::prelude::*;
//!
//! let nodes: Vec<u32> = (1..=6).collect();
//! let graph = UndirectedGraph::generate(Topology::Cycle, &nodes)?;
//!
//! assert_eq!(graph.order(), 6);
//! assert_eq!(graph.size(), 6);
//! assert_eq!(graph.degree(&1), 2);
//!
//! let visited: Vec<u32> = BreadthFirstSearch::new(&graph, 1).collect();
//! assert_eq!(visited, vec![1, 2, 6, 3, 5, 4]);
//! assert_eq!(graph.distance(&1, &4), Some(3));
//! # Ok::<(), loopless::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Link types, the generic [`Graph`] container and its directed / undirected forms
//! - [`graph::algorithms`] - Traversal iterators and frontier-based distance
//! - [`generate`] - Topology catalogue, random graphs and node naming
//! - [`utils`] - Random sampling helpers over collections
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T>`]. Malformed generator parameters, edges that
//! reference absent nodes and out-of-range probabilities are reported through [`Error`];
//! self-loops are never an error, they are filtered.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `debug` and `trace` level and leaves the choice
//! of subscriber to the application.

#[macro_use]
pub(crate) mod error;

pub mod prelude;

pub mod graph;

pub mod generate;

pub mod utils;

/// `loopless` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `loopless` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

pub use generate::{
    config::RandomGraphConfig,
    naming::{lettered_nodes, numbered_nodes},
    topology::{Topology, TopologyKind},
};
pub use graph::{
    algorithms::{
        distance, Breadthwise, BreadthFirstSearch, DepthFirstPolicy, DepthFirstSearch, Reachable,
    },
    Adjacency, Arc, DirectedGraph, Edge, Graph, GraphBase, Link, Neighborhood, Node, Reversible,
    UndirectedGraph,
};
