//! Stable priority queue over a singly linked node sequence
//!
//! [`PriorityQueue`] keeps its nodes sorted by priority, highest first.
//! A new node is linked after every node whose priority is greater than or
//! equal to its own and before the first node with a strictly lower
//! priority, so equal priorities are served in insertion order.
//!
//! The queue owns a copy of everything inserted through
//! [`insert`](PriorityQueue::insert) and releases it through the behavior's
//! free functions when the node is removed, cleared or the queue drops.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert` / `push` | O(n)       |
//! | `remove_first`    | O(1)       |
//! | `pop` / `peek`    | O(1)       |
//! | `remove_element`  | O(n)       |
//! | `change_priority` | O(n)       |
//! | `contains`        | O(n)       |
//! | `try_clone`       | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use linked_priority_queue::{Natural, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new(Natural::<i32, i32>::new());
//! queue.insert(&10, &5).unwrap();
//! queue.insert(&20, &5).unwrap();
//! queue.insert(&30, &7).unwrap();
//!
//! let order: Vec<_> = queue.elements().copied().collect();
//! assert_eq!(order, vec![30, 10, 20]);
//!
//! queue.remove_element(&10).unwrap();
//! assert_eq!(queue.len(), 2);
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use log::{debug, trace, warn};

use crate::cursor::{Cursor, Iter};
use crate::storage::{Node, NodeArena, NodeKey};
use crate::traits::{QueueBehavior, QueueError, Result};

static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(1);

fn next_queue_id() -> u64 {
    NEXT_QUEUE_ID.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A priority queue parameterized by a [`QueueBehavior`]
pub struct PriorityQueue<B: QueueBehavior> {
    behavior: Rc<B>,
    arena: NodeArena<B::Element, B::Priority>,
    /// Identity checked by detached cursors
    id: u64,
    /// Bumped on every structural mutation
    generation: u64,
    cursor: Cell<Cursor>,
}

impl<B: QueueBehavior> PriorityQueue<B> {
    /// Creates an empty queue driven by `behavior`
    pub fn new(behavior: B) -> Self {
        Self::with_shared(Rc::new(behavior))
    }

    /// Creates an empty queue sharing an existing behavior set
    pub fn with_shared(behavior: Rc<B>) -> Self {
        Self {
            behavior,
            arena: NodeArena::new(),
            id: next_queue_id(),
            generation: 0,
            cursor: Cell::new(Cursor::new()),
        }
    }

    /// The behavior set this queue delegates to
    #[inline]
    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    #[inline]
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub(crate) fn arena(&self) -> &NodeArena<B::Element, B::Priority> {
        &self.arena
    }

    /// Records a structural change: detached cursors go stale and the
    /// embedded cursor goes idle.
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.cursor.set(Cursor::new());
    }

    /// Copies `element` and `priority` and links the copies into place
    ///
    /// # Errors
    ///
    /// [`QueueError::OutOfMemory`] if either copy fails. Any copy already
    /// made is released and the queue is left untouched.
    pub fn insert(&mut self, element: &B::Element, priority: &B::Priority) -> Result<()> {
        let node = self.copy_node(element, priority)?;
        self.link(node);
        Ok(())
    }

    /// Moves an owned pair into the queue without copying
    ///
    /// Placement and invalidation are the same as [`insert`](Self::insert).
    pub fn push(&mut self, priority: B::Priority, element: B::Element) {
        self.link(Node::new(element, priority));
    }

    /// Returns true if any element is equal to `element`
    pub fn contains(&self, element: &B::Element) -> bool {
        self.find(element, None).is_some()
    }

    /// Returns true if some node holds an element equal to `element` with a
    /// priority comparing equal to `priority`
    pub fn contains_with_priority(&self, element: &B::Element, priority: &B::Priority) -> bool {
        self.find(element, Some(priority)).is_some()
    }

    /// The head's priority and element
    pub fn peek(&self) -> Option<(&B::Priority, &B::Element)> {
        self.arena
            .head()
            .and_then(|key| self.arena.get(key))
            .map(|node| (&node.priority, &node.element))
    }

    /// Detaches the head and hands its element and priority to the caller
    ///
    /// Ownership moves out, so the behavior's free functions are not called.
    pub fn pop(&mut self) -> Option<(B::Priority, B::Element)> {
        let node = self.arena.unlink_after(None)?;
        self.touch();
        trace!("popped head, {} remaining", self.arena.len());
        Some((node.priority, node.element))
    }

    /// Destroys the head node; an empty queue is left as is
    pub fn remove_first(&mut self) {
        if let Some(node) = self.arena.unlink_after(None) {
            self.touch();
            self.release(node);
            trace!("removed head, {} remaining", self.arena.len());
        }
    }

    /// Destroys the first node (head-to-tail) whose element equals `element`
    ///
    /// At most one node is removed even if several match.
    ///
    /// # Errors
    ///
    /// [`QueueError::ElementDoesNotExist`] if no element matches.
    pub fn remove_element(&mut self, element: &B::Element) -> Result<()> {
        let (prev, _) = self
            .find(element, None)
            .ok_or(QueueError::ElementDoesNotExist)?;
        self.remove_after(prev);
        Ok(())
    }

    /// Moves `element` from `old_priority` to `new_priority`
    ///
    /// The target is the first node whose element equals `element` and whose
    /// priority compares equal to `old_priority`. It is destroyed and a
    /// fresh copy of `element` is placed by the ordinary insert rule, so it
    /// lands after any nodes already holding `new_priority`.
    ///
    /// # Errors
    ///
    /// - [`QueueError::ElementDoesNotExist`] if no node matches both.
    /// - [`QueueError::OutOfMemory`] if copying fails.
    ///
    /// The queue is unchanged on either error.
    pub fn change_priority(
        &mut self,
        element: &B::Element,
        old_priority: &B::Priority,
        new_priority: &B::Priority,
    ) -> Result<()> {
        let (prev, _) = self
            .find(element, Some(old_priority))
            .ok_or(QueueError::ElementDoesNotExist)?;
        // Both copies exist before the old node is unlinked.
        let node = self.copy_node(element, new_priority)?;
        self.remove_after(prev);
        self.link(node);
        Ok(())
    }

    /// Destroys every node
    pub fn clear(&mut self) {
        let released = self.release_all();
        self.touch();
        debug!("cleared queue, released {} nodes", released);
    }

    /// Deep-copies the queue
    ///
    /// The clone shares the behavior set and nothing else. Both the source
    /// and the clone start with an idle embedded cursor.
    ///
    /// # Errors
    ///
    /// [`QueueError::OutOfMemory`] if any copy fails. Nodes already copied
    /// into the partial clone are released before returning.
    pub fn try_clone(&self) -> Result<Self> {
        self.cursor.set(Cursor::new());
        let mut clone = Self::with_shared(Rc::clone(&self.behavior));
        let mut tail = None;
        for (_, node) in self.arena.nodes() {
            // `clone` drops on early return, releasing its nodes.
            let copy = clone.copy_node(&node.element, &node.priority)?;
            tail = Some(clone.arena.link_after(tail, copy));
        }
        debug!("cloned queue with {} nodes", clone.len());
        Ok(clone)
    }

    /// Restarts the embedded cursor at the head and returns its element
    pub fn get_first(&self) -> Option<&B::Element> {
        let mut cursor = self.cursor.get();
        let element = cursor.first(self);
        self.cursor.set(cursor);
        element
    }

    /// Advances the embedded cursor and returns the element it lands on
    ///
    /// Returns `None` if [`get_first`](Self::get_first) was not called since
    /// the last mutation, or the cursor ran past the tail.
    pub fn get_next(&self) -> Option<&B::Element> {
        let mut cursor = self.cursor.get();
        let element = cursor.next(self);
        self.cursor.set(cursor);
        element
    }

    /// Iterates `(priority, element)` pairs, highest priority first
    pub fn iter(&self) -> Iter<'_, B> {
        Iter::new(self)
    }

    /// Iterates elements, highest priority first
    pub fn elements(&self) -> impl Iterator<Item = &B::Element> + '_ {
        self.iter().map(|(_, element)| element)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn copy_node(
        &self,
        element: &B::Element,
        priority: &B::Priority,
    ) -> Result<Node<B::Element, B::Priority>> {
        let Some(element) = self.behavior.copy_element(element) else {
            warn!("element copy failed");
            return Err(QueueError::OutOfMemory);
        };
        let Some(priority) = self.behavior.copy_priority(priority) else {
            warn!("priority copy failed");
            self.behavior.free_element(element);
            return Err(QueueError::OutOfMemory);
        };
        Ok(Node::new(element, priority))
    }

    /// Links `node` after the run of nodes whose priority is >= its own
    fn link(&mut self, node: Node<B::Element, B::Priority>) {
        let behavior = &self.behavior;
        let prev = self.arena.last_while(|existing| {
            behavior.compare_priorities(&existing.priority, &node.priority) != Ordering::Less
        });
        self.arena.link_after(prev, node);
        self.touch();
        trace!("linked node, {} in queue", self.arena.len());
    }

    fn find(
        &self,
        element: &B::Element,
        priority: Option<&B::Priority>,
    ) -> Option<(Option<NodeKey>, NodeKey)> {
        let behavior = &self.behavior;
        self.arena.find(|node| {
            behavior.equal_elements(element, &node.element)
                && priority.map_or(true, |p| {
                    behavior.compare_priorities(p, &node.priority) == Ordering::Equal
                })
        })
    }

    fn remove_after(&mut self, prev: Option<NodeKey>) {
        if let Some(node) = self.arena.unlink_after(prev) {
            self.touch();
            self.release(node);
            trace!("removed node, {} remaining", self.arena.len());
        }
    }

    fn release(&self, node: Node<B::Element, B::Priority>) {
        self.behavior.free_element(node.element);
        self.behavior.free_priority(node.priority);
    }

    fn release_all(&mut self) -> usize {
        let mut released = 0;
        while let Some(node) = self.arena.unlink_after(None) {
            self.release(node);
            released += 1;
        }
        released
    }
}

impl<B: QueueBehavior> Drop for PriorityQueue<B> {
    fn drop(&mut self) {
        let released = self.release_all();
        if released > 0 {
            debug!("dropped queue, released {} nodes", released);
        }
    }
}

impl<B: QueueBehavior + Default> Default for PriorityQueue<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: QueueBehavior> fmt::Debug for PriorityQueue<B>
where
    B::Element: fmt::Debug,
    B::Priority: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, B: QueueBehavior> IntoIterator for &'a PriorityQueue<B> {
    type Item = (&'a B::Priority, &'a B::Element);
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B: QueueBehavior> Extend<(B::Priority, B::Element)> for PriorityQueue<B> {
    fn extend<I: IntoIterator<Item = (B::Priority, B::Element)>>(&mut self, iter: I) {
        for (priority, element) in iter {
            self.push(priority, element);
        }
    }
}

impl<B: QueueBehavior + Default> FromIterator<(B::Priority, B::Element)> for PriorityQueue<B> {
    fn from_iter<I: IntoIterator<Item = (B::Priority, B::Element)>>(iter: I) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);
        queue
    }
}
