//! Node contract for graph vertices.
//!
//! A node is an opaque, immutable value identified purely by equality. Two nodes that
//! compare equal are the same vertex; building a graph from a list that repeats a value
//! collapses the repetitions into one node.

use std::{fmt, hash::Hash};

/// Any value type usable as a graph vertex.
///
/// `Node` bundles the capabilities every container and algorithm relies on: cloning into
/// owned sets, equality, hashing and a debug rendering for diagnostics. It is implemented
/// automatically for every type that provides them, so integers, strings, chars and
/// user-defined `#[derive(Clone, PartialEq, Eq, Hash, Debug)]` types qualify without any
/// extra code.
///
/// A total order is an optional extra capability. Traversals that want deterministic
/// tie-breaking require `N: Ord` on their ordered constructors; see
/// [`BreadthFirstSearch::new`](crate::graph::algorithms::BreadthFirstSearch::new).
///
/// # Examples
///
/// ```rust
/// use loopless::Node;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// struct Station(&'static str);
///
/// fn takes_node<N: Node>(_: N) {}
/// takes_node(Station("Central"));
/// takes_node(42u64);
/// takes_node(String::from("A"));
/// ```
pub trait Node: Clone + Eq + Hash + fmt::Debug {}

impl<T> Node for T where T: Clone + Eq + Hash + fmt::Debug {}
