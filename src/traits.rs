//! Common traits for the linked priority queue
//!
//! The queue never looks inside the values it stores. Everything it needs
//! to know about an element or a priority goes through a [`QueueBehavior`]
//! chosen when the queue is built:
//!
//! - copying an element or a priority (which may fail)
//! - releasing an element or a priority the queue owns
//! - deciding whether two elements are equal
//! - ordering two priorities
//!
//! Ready-made implementations live in [`crate::behavior`].

use std::cmp::Ordering;

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A required argument was missing (names the behavior function)
    #[error("missing required argument: {0}")]
    NullArgument(&'static str),
    /// A copy callback could not produce a copy
    #[error("out of memory while copying a queue value")]
    OutOfMemory,
    /// No node in the queue matched the lookup
    #[error("element does not exist in the queue")]
    ElementDoesNotExist,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QueueError>;

/// The behavior set a queue delegates to
///
/// `compare_priorities(a, b)` returning [`Ordering::Greater`] means `a` is
/// served before `b`. Priorities comparing [`Ordering::Equal`] share a band
/// and keep insertion order inside it.
///
/// Copies return `None` to report an allocation failure. The queue treats
/// that as [`QueueError::OutOfMemory`] and leaves itself unchanged.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use linked_priority_queue::{PriorityQueue, QueueBehavior};
///
/// /// Shortest name first
/// struct ByLength;
///
/// impl QueueBehavior for ByLength {
///     type Element = String;
///     type Priority = usize;
///
///     fn copy_element(&self, element: &String) -> Option<String> {
///         Some(element.clone())
///     }
///     fn equal_elements(&self, a: &String, b: &String) -> bool {
///         a.eq_ignore_ascii_case(b)
///     }
///     fn copy_priority(&self, priority: &usize) -> Option<usize> {
///         Some(*priority)
///     }
///     fn compare_priorities(&self, a: &usize, b: &usize) -> Ordering {
///         b.cmp(a)
///     }
/// }
///
/// let mut queue = PriorityQueue::new(ByLength);
/// queue.insert(&"pandora".to_string(), &7).unwrap();
/// queue.insert(&"io".to_string(), &2).unwrap();
/// assert!(queue.contains(&"IO".to_string()));
/// assert_eq!(queue.get_first().map(String::as_str), Some("io"));
/// ```
pub trait QueueBehavior {
    /// The element type stored in the queue
    type Element;
    /// The priority type attached to every element
    type Priority;

    /// Produces an independently owned copy of `element`
    fn copy_element(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Releases an element the queue owns
    fn free_element(&self, element: Self::Element) {
        drop(element);
    }

    /// Returns true if both elements denote the same entry
    fn equal_elements(&self, a: &Self::Element, b: &Self::Element) -> bool;

    /// Produces an independently owned copy of `priority`
    fn copy_priority(&self, priority: &Self::Priority) -> Option<Self::Priority>;

    /// Releases a priority the queue owns
    fn free_priority(&self, priority: Self::Priority) {
        drop(priority);
    }

    /// Orders two priorities; `Greater` is served first
    fn compare_priorities(&self, a: &Self::Priority, b: &Self::Priority) -> Ordering;
}
