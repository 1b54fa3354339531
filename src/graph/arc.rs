//! Directed links.

use std::fmt;

use crate::graph::{Link, Node, Reversible};

/// An ordered pair of distinct nodes, directed from `u` to `v`.
///
/// Equality and hashing respect the orientation: `(u->v)` and `(v->u)` are different
/// arcs. Arcs can only be obtained through [`Link::try_new`], which rejects self-loops.
///
/// # Examples
///
/// ```rust
/// use loopless::{Arc, Link, Reversible};
///
/// let arc = Arc::try_new('a', 'b').unwrap();
/// assert_eq!(arc.u(), &'a');
/// assert_ne!(arc, arc.reversed());
/// assert_eq!(arc, arc.reversed().reversed());
/// assert_eq!(arc.to_string(), "('a'->'b')");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Arc<N> {
    u: N,
    v: N,
}

impl<N: Node> Link<N> for Arc<N> {
    const DIRECTED: bool = true;

    fn try_new(u: N, v: N) -> Option<Self> {
        if u == v {
            return None;
        }
        Some(Arc { u, v })
    }

    fn u(&self) -> &N {
        &self.u
    }

    fn v(&self) -> &N {
        &self.v
    }

    fn joins(&self, u: &N, v: &N) -> bool {
        &self.u == u && &self.v == v
    }
}

impl<N: Node> Reversible for Arc<N> {
    fn reversed(&self) -> Self {
        Arc {
            u: self.v.clone(),
            v: self.u.clone(),
        }
    }
}

impl<N: fmt::Debug> fmt::Display for Arc<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}->{:?})", self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_arc_rejects_self_loop() {
        assert!(Arc::try_new(3, 3).is_none());
        assert!(Arc::try_new("x", "x").is_none());
    }

    #[test]
    fn test_arc_is_ordered() {
        let forward = Arc::try_new(1, 2).unwrap();
        let backward = Arc::try_new(2, 1).unwrap();

        assert_ne!(forward, backward);
        assert!(forward.joins(&1, &2));
        assert!(!forward.joins(&2, &1));

        let set: HashSet<_> = [forward.clone(), backward, forward].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_arc_incidence() {
        let arc = Arc::try_new(1, 2).unwrap();

        assert!(arc.is_incident(&1));
        assert!(arc.is_incident(&2));
        assert!(!arc.is_incident(&3));
        assert!(arc.is_incident_with(&2, &1));
        assert!(!arc.is_incident_with(&1, &3));
        assert_eq!(arc.neighbor(&1), Some(&2));
        assert_eq!(arc.neighbor(&2), Some(&1));
        assert_eq!(arc.neighbor(&3), None);
        assert_eq!(arc.endpoints(), (&1, &2));
    }

    #[test]
    fn test_arc_reversed() {
        let arc = Arc::try_new(1, 2).unwrap();
        let reversed = arc.reversed();

        assert_eq!(reversed.u(), &2);
        assert_eq!(reversed.v(), &1);
        assert_eq!(reversed.reversed(), arc);
    }
}
