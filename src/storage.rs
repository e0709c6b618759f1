//! Arena storage for the queue's singly linked node sequence
//!
//! Nodes live in a [`SlotMap`] and point at their successor by key, so the
//! list is walked and relinked with plain loops instead of recursion over
//! boxed nodes. Keys are generational: a key held past the removal of its
//! node never resolves to a different node.
//!
//! [`NodeArena`] knows nothing about priorities. It offers the primitives
//! the queue builds on:
//!
//! - [`link_after`](NodeArena::link_after): splice a node after a given
//!   predecessor (or at the head)
//! - [`unlink_after`](NodeArena::unlink_after): detach the successor of a
//!   given predecessor (or the head)
//! - [`find`](NodeArena::find): first node matching a predicate, together
//!   with its predecessor

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key referring to a node in a [`NodeArena`]
    pub struct NodeKey;
}

/// A single link of the sequence
#[derive(Debug)]
pub struct Node<E, P> {
    pub element: E,
    pub priority: P,
    pub(crate) next: Option<NodeKey>,
}

impl<E, P> Node<E, P> {
    /// Creates an unlinked node
    pub fn new(element: E, priority: P) -> Self {
        Self {
            element,
            priority,
            next: None,
        }
    }

    /// Key of the following node, if any
    #[inline]
    pub fn next(&self) -> Option<NodeKey> {
        self.next
    }
}

/// Slotmap-backed singly linked list
#[derive(Debug)]
pub struct NodeArena<E, P> {
    nodes: SlotMap<NodeKey, Node<E, P>>,
    head: Option<NodeKey>,
}

impl<E, P> Default for NodeArena<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P> NodeArena<E, P> {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
        }
    }

    /// Number of linked nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn head(&self) -> Option<NodeKey> {
        self.head
    }

    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&Node<E, P>> {
        self.nodes.get(key)
    }

    /// Key of the node after `key`
    #[inline]
    pub fn next_of(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(Node::next)
    }

    /// Links `node` directly after `prev`, or at the head when `prev` is `None`
    ///
    /// A `prev` key that no longer resolves is treated as the head.
    pub fn link_after(&mut self, prev: Option<NodeKey>, mut node: Node<E, P>) -> NodeKey {
        let prev = prev.filter(|k| self.nodes.contains_key(*k));
        node.next = match prev {
            Some(p) => self.nodes[p].next,
            None => self.head,
        };
        let key = self.nodes.insert(node);
        match prev {
            Some(p) => self.nodes[p].next = Some(key),
            None => self.head = Some(key),
        }
        key
    }

    /// Detaches and returns the node following `prev`, or the head when `prev` is `None`
    pub fn unlink_after(&mut self, prev: Option<NodeKey>) -> Option<Node<E, P>> {
        let target = match prev {
            Some(p) => self.nodes.get(p)?.next?,
            None => self.head?,
        };
        let mut node = self.nodes.remove(target)?;
        match prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        node.next = None;
        Some(node)
    }

    /// Finds the first node (head-to-tail) satisfying `pred`
    ///
    /// Returns `(predecessor, key)`; the predecessor is `None` for the head.
    pub fn find<F>(&self, mut pred: F) -> Option<(Option<NodeKey>, NodeKey)>
    where
        F: FnMut(&Node<E, P>) -> bool,
    {
        let mut prev = None;
        let mut current = self.head;
        while let Some(key) = current {
            let node = &self.nodes[key];
            if pred(node) {
                return Some((prev, key));
            }
            prev = Some(key);
            current = node.next;
        }
        None
    }

    /// Last node (head-to-tail) for which `pred` holds, stopping at the first miss
    ///
    /// Returns `None` when the head already fails `pred` or the arena is empty.
    pub fn last_while<F>(&self, mut pred: F) -> Option<NodeKey>
    where
        F: FnMut(&Node<E, P>) -> bool,
    {
        let mut last = None;
        let mut current = self.head;
        while let Some(key) = current {
            let node = &self.nodes[key];
            if !pred(node) {
                break;
            }
            last = Some(key);
            current = node.next;
        }
        last
    }

    /// Walks the nodes head-to-tail
    pub fn nodes(&self) -> Nodes<'_, E, P> {
        Nodes {
            arena: self,
            next: self.head,
            remaining: self.len(),
        }
    }
}

/// Borrowing walk over an arena, head-to-tail
pub struct Nodes<'a, E, P> {
    arena: &'a NodeArena<E, P>,
    next: Option<NodeKey>,
    remaining: usize,
}

impl<'a, E, P> Iterator for Nodes<'a, E, P> {
    type Item = (NodeKey, &'a Node<E, P>);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        let node = self.arena.get(key)?;
        self.next = node.next;
        self.remaining -= 1;
        Some((key, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E, P> ExactSizeIterator for Nodes<'_, E, P> {}

impl<E, P> Clone for Nodes<'_, E, P> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            next: self.next,
            remaining: self.remaining,
        }
    }
}
