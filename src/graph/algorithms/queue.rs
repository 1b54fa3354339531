//! FIFO queue with constant-time membership tests.
//!
//! Breadth-first search must not enqueue a node that is already waiting in the queue.
//! [`NodeQueue`] pairs a ring buffer with a hash set of its current members so that
//! enqueue, dequeue and the membership test are all O(1).

use std::{
    collections::{HashSet, VecDeque},
    fmt,
};

use crate::graph::Node;

/// A first-in first-out queue of nodes that knows which nodes it currently holds.
#[derive(Clone)]
pub(crate) struct NodeQueue<N> {
    items: VecDeque<N>,
    members: HashSet<N>,
}

impl<N: Node> NodeQueue<N> {
    /// Creates an empty queue.
    pub(crate) fn new() -> Self {
        NodeQueue {
            items: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    /// Appends `node` at the back.
    ///
    /// # Returns
    ///
    /// `false` without enqueueing when `node` is already in the queue.
    pub(crate) fn enqueue(&mut self, node: N) -> bool {
        if !self.members.insert(node.clone()) {
            return false;
        }
        self.items.push_back(node);
        true
    }

    /// Removes and returns the node at the front.
    pub(crate) fn dequeue(&mut self) -> Option<N> {
        let node = self.items.pop_front()?;
        self.members.remove(&node);
        Some(node)
    }

    /// Returns `true` if `node` is waiting in the queue.
    pub(crate) fn contains(&self, node: &N) -> bool {
        self.members.contains(node)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<N: fmt::Debug> fmt::Debug for NodeQueue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<N: fmt::Debug> fmt::Display for NodeQueue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " <- ")?;
            }
            write!(f, "{node:?}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = NodeQueue::new();
        for node in [3, 1, 2] {
            assert!(queue.enqueue(node));
        }

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_rejects_queued_duplicates() {
        let mut queue = NodeQueue::new();

        assert!(queue.enqueue('a'));
        assert!(!queue.enqueue('a'));
        assert!(queue.contains(&'a'));
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.dequeue(), Some('a'));
        assert!(!queue.contains(&'a'));
        assert!(queue.enqueue('a'));
    }

    #[test]
    fn test_formatting() {
        let mut queue = NodeQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);

        assert_eq!(format!("{queue:?}"), "[1, 2]");
        assert_eq!(queue.to_string(), "[1 <- 2]");
    }
}
