//! Traversal of a [`PriorityQueue`]
//!
//! Two ways to walk a queue head-to-tail:
//!
//! - [`Iter`]: an ordinary [`Iterator`] borrowing the queue. The borrow
//!   checker rules out mutation while it is alive.
//! - [`Cursor`]: a detached, `Copy` position that does not borrow the
//!   queue. It records the queue it was started on and the queue's
//!   generation at that time; any structural mutation afterwards makes
//!   [`Cursor::next`] return `None` instead of a stale node.
//!
//! The queue's own [`get_first`](PriorityQueue::get_first) /
//! [`get_next`](PriorityQueue::get_next) pair drives an embedded cursor.
//!
//! # Example
//!
//! ```rust
//! use linked_priority_queue::{Cursor, Natural, PriorityQueue};
//!
//! let mut queue: PriorityQueue<Natural<i32, i32>> =
//!     [(5, 10), (5, 20), (7, 30)].into_iter().collect();
//! let mut cursor = Cursor::new();
//! assert_eq!(cursor.first(&queue), Some(&30));
//! assert_eq!(cursor.next(&queue), Some(&10));
//!
//! queue.push(1, 40);
//! assert_eq!(cursor.next(&queue), None);
//! ```

use crate::queue::PriorityQueue;
use crate::storage::{NodeKey, Nodes};
use crate::traits::QueueBehavior;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    index: usize,
    key: NodeKey,
}

/// Single-pass cursor over a queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    queue_id: u64,
    generation: u64,
    position: Option<Position>,
}

impl Cursor {
    /// Creates an idle cursor
    pub const fn new() -> Self {
        Self {
            queue_id: 0,
            generation: 0,
            position: None,
        }
    }

    /// True while the cursor points at a node
    ///
    /// This does not consult any queue; a cursor invalidated by mutation
    /// stays active until its next [`next`](Self::next) call.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    /// Zero-based index of the current node
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.position.map(|p| p.index)
    }

    /// Goes idle
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Restarts at the head of `queue` and returns its element
    pub fn first<'q, B: QueueBehavior>(
        &mut self,
        queue: &'q PriorityQueue<B>,
    ) -> Option<&'q B::Element> {
        self.queue_id = queue.id();
        self.generation = queue.generation();
        let arena = queue.arena();
        let key = arena.head();
        self.position = key.map(|key| Position { index: 0, key });
        key.and_then(|k| arena.get(k)).map(|node| &node.element)
    }

    /// Advances one node and returns its element
    ///
    /// Returns `None` and goes idle if the cursor was never started, ran
    /// past the tail, belongs to another queue, or the queue was mutated
    /// since [`first`](Self::first).
    pub fn next<'q, B: QueueBehavior>(
        &mut self,
        queue: &'q PriorityQueue<B>,
    ) -> Option<&'q B::Element> {
        let Some(position) = self.position else {
            return None;
        };
        if self.queue_id != queue.id() || self.generation != queue.generation() {
            self.reset();
            return None;
        }
        let arena = queue.arena();
        match arena.next_of(position.key) {
            Some(key) => {
                self.position = Some(Position {
                    index: position.index + 1,
                    key,
                });
                arena.get(key).map(|node| &node.element)
            }
            None => {
                self.reset();
                None
            }
        }
    }
}

/// Borrowing iterator over `(priority, element)` pairs, highest priority first
pub struct Iter<'a, B: QueueBehavior> {
    nodes: Nodes<'a, B::Element, B::Priority>,
}

impl<'a, B: QueueBehavior> Iter<'a, B> {
    pub(crate) fn new(queue: &'a PriorityQueue<B>) -> Self {
        Self {
            nodes: queue.arena().nodes(),
        }
    }
}

impl<'a, B: QueueBehavior> Iterator for Iter<'a, B> {
    type Item = (&'a B::Priority, &'a B::Element);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes
            .next()
            .map(|(_, node)| (&node.priority, &node.element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<B: QueueBehavior> ExactSizeIterator for Iter<'_, B> {}

impl<B: QueueBehavior> Clone for Iter<'_, B> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}
