//! Undirected links.
//!
//! An [`Edge`] stores its endpoints in the order they were given but ignores that order
//! for equality and hashing. The hash combines the two endpoint hashes symmetrically so
//! that `(u,v)` and `(v,u)` always land in the same bucket of a hashed set.

use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
};

use crate::graph::{Link, Node};

/// An unordered pair of distinct nodes.
///
/// # Examples
///
/// ```rust
/// use loopless::{Edge, Link};
///
/// let edge = Edge::try_new(1, 2).unwrap();
/// assert_eq!(edge, Edge::try_new(2, 1).unwrap());
/// assert_eq!(edge.to_string(), "(1,2)");
/// ```
#[derive(Clone, Debug)]
pub struct Edge<N> {
    u: N,
    v: N,
}

impl<N: Node> Link<N> for Edge<N> {
    const DIRECTED: bool = false;

    fn try_new(u: N, v: N) -> Option<Self> {
        if u == v {
            return None;
        }
        Some(Edge { u, v })
    }

    fn u(&self) -> &N {
        &self.u
    }

    fn v(&self) -> &N {
        &self.v
    }

    fn joins(&self, u: &N, v: &N) -> bool {
        self.is_incident_with(u, v)
    }
}

impl<N: PartialEq> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        (self.u == other.u && self.v == other.v) || (self.u == other.v && self.v == other.u)
    }
}

impl<N: Eq> Eq for Edge<N> {}

impl<N: Hash> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let a = endpoint_hash(&self.u);
        let b = endpoint_hash(&self.v);
        state.write_u64(a.min(b));
        state.write_u64(a.max(b));
    }
}

fn endpoint_hash<N: Hash>(node: &N) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.hash(&mut hasher);
    hasher.finish()
}

impl<N: fmt::Debug> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?},{:?})", self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_edge_rejects_self_loop() {
        assert!(Edge::try_new(7, 7).is_none());
        assert!(Edge::try_new(String::from("A"), String::from("A")).is_none());
    }

    #[test]
    fn test_edge_is_unordered() {
        let forward = Edge::try_new(1, 2).unwrap();
        let backward = Edge::try_new(2, 1).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
        assert!(forward.joins(&1, &2));
        assert!(forward.joins(&2, &1));
        assert!(!forward.joins(&1, &3));
    }

    #[test]
    fn test_edge_deduplicates_in_sets() {
        let set: HashSet<_> = [(1, 2), (2, 1), (2, 3), (3, 2), (1, 3)]
            .into_iter()
            .filter_map(|(u, v)| Edge::try_new(u, v))
            .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_edge_neighbor() {
        let edge = Edge::try_new("A", "B").unwrap();

        assert_eq!(edge.neighbor(&"A"), Some(&"B"));
        assert_eq!(edge.neighbor(&"B"), Some(&"A"));
        assert_eq!(edge.neighbor(&"C"), None);
        assert!(edge.is_incident_with(&"B", &"A"));
    }

    #[test]
    fn test_edge_hash_differs_for_distinct_pairs() {
        let a = Edge::try_new(1, 2).unwrap();
        let b = Edge::try_new(1, 3).unwrap();
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }
}
