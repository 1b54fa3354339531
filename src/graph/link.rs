//! Shared contract of directed arcs and undirected edges.
//!
//! Both link kinds are a pair of distinct nodes. They differ only in whether the
//! orientation of the pair matters, which [`Link::DIRECTED`] exposes so that containers
//! can build their adjacency accordingly.

use crate::graph::Node;

/// A pair of distinct nodes connected by a directed or undirected link.
///
/// Implementors must reject self-loops in [`Link::try_new`]; this is the only validation
/// rule of the data model and is what keeps every graph in this crate simple.
///
/// # Examples
///
/// ```rust
/// use loopless::{Arc, Edge, Link};
///
/// assert!(Edge::try_new(1, 1).is_none());
///
/// let edge = Edge::try_new(1, 2).unwrap();
/// assert!(edge.joins(&2, &1));
///
/// let arc = Arc::try_new(1, 2).unwrap();
/// assert!(!arc.joins(&2, &1));
/// assert_eq!(arc.neighbor(&2), Some(&1));
/// ```
pub trait Link<N: Node>: Clone + Eq + std::hash::Hash + std::fmt::Debug {
    /// `true` when the orientation of the pair is significant.
    const DIRECTED: bool;

    /// Builds a link from `u` to `v`.
    ///
    /// # Returns
    ///
    /// `None` when `u == v`.
    fn try_new(u: N, v: N) -> Option<Self>;

    /// The first endpoint; the source of an arc.
    fn u(&self) -> &N;

    /// The second endpoint; the destination of an arc.
    fn v(&self) -> &N;

    /// `true` if the link connects `u` and `v`.
    ///
    /// Arcs require the exact orientation, edges accept either.
    fn joins(&self, u: &N, v: &N) -> bool;

    /// Both endpoints as a tuple of references.
    fn endpoints(&self) -> (&N, &N) {
        (self.u(), self.v())
    }

    /// `true` if `node` is one of the two endpoints.
    fn is_incident(&self, node: &N) -> bool {
        self.u() == node || self.v() == node
    }

    /// `true` if the endpoints are exactly `a` and `b`, in any order.
    fn is_incident_with(&self, a: &N, b: &N) -> bool {
        (self.u() == a && self.v() == b) || (self.u() == b && self.v() == a)
    }

    /// Returns the endpoint opposite to `node`.
    ///
    /// # Returns
    ///
    /// `None` when `node` is not an endpoint of this link.
    fn neighbor(&self, node: &N) -> Option<&N> {
        if self.u() == node {
            Some(self.v())
        } else if self.v() == node {
            Some(self.u())
        } else {
            None
        }
    }
}
