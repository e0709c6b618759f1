//! Ready-made behavior sets
//!
//! - [`Natural`]: uses `Clone`, `PartialEq` and `Ord` directly. Larger
//!   priorities are served first and copies never fail.
//! - [`FnBehavior`]: six boxed closures, assembled with [`QueueBuilder`].
//!
//! # Example
//!
//! ```rust
//! use linked_priority_queue::behavior::QueueBuilder;
//!
//! let mut queue = QueueBuilder::<u32, u32>::new()
//!     .copy_element(|e| Some(*e))
//!     .free_element(drop)
//!     .equal_elements(|a, b| a == b)
//!     .copy_priority(|p| Some(*p))
//!     .free_priority(drop)
//!     .compare_priorities(|a, b| a.cmp(b))
//!     .build()
//!     .unwrap();
//!
//! queue.insert(&10, &5).unwrap();
//! queue.insert(&30, &7).unwrap();
//! assert_eq!(queue.get_first(), Some(&30));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::queue::PriorityQueue;
use crate::traits::{QueueBehavior, QueueError, Result};

/// Behavior derived from the standard traits
///
/// Equality is `PartialEq`, ordering is `Ord` with the larger priority
/// first, and copies are `Clone`.
pub struct Natural<T, P> {
    _phantom: PhantomData<fn() -> (T, P)>,
}

impl<T, P> Natural<T, P> {
    /// Creates the behavior
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T, P> Default for Natural<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Clone for Natural<T, P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T, P> fmt::Debug for Natural<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Natural")
    }
}

impl<T: Clone + PartialEq, P: Clone + Ord> QueueBehavior for Natural<T, P> {
    type Element = T;
    type Priority = P;

    #[inline]
    fn copy_element(&self, element: &T) -> Option<T> {
        Some(element.clone())
    }

    #[inline]
    fn equal_elements(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn copy_priority(&self, priority: &P) -> Option<P> {
        Some(priority.clone())
    }

    #[inline]
    fn compare_priorities(&self, a: &P, b: &P) -> Ordering {
        a.cmp(b)
    }
}

type CopyFn<V> = Box<dyn Fn(&V) -> Option<V>>;
type FreeFn<V> = Box<dyn Fn(V)>;
type EqualFn<V> = Box<dyn Fn(&V, &V) -> bool>;
type CompareFn<V> = Box<dyn Fn(&V, &V) -> Ordering>;

/// Behavior backed by caller-supplied closures
///
/// Built through [`QueueBuilder`], which refuses to produce one with a
/// missing function.
pub struct FnBehavior<T, P> {
    copy_element: CopyFn<T>,
    free_element: FreeFn<T>,
    equal_elements: EqualFn<T>,
    copy_priority: CopyFn<P>,
    free_priority: FreeFn<P>,
    compare_priorities: CompareFn<P>,
}

impl<T, P> fmt::Debug for FnBehavior<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnBehavior")
    }
}

impl<T, P> QueueBehavior for FnBehavior<T, P> {
    type Element = T;
    type Priority = P;

    fn copy_element(&self, element: &T) -> Option<T> {
        (self.copy_element)(element)
    }

    fn free_element(&self, element: T) {
        (self.free_element)(element)
    }

    fn equal_elements(&self, a: &T, b: &T) -> bool {
        (self.equal_elements)(a, b)
    }

    fn copy_priority(&self, priority: &P) -> Option<P> {
        (self.copy_priority)(priority)
    }

    fn free_priority(&self, priority: P) {
        (self.free_priority)(priority)
    }

    fn compare_priorities(&self, a: &P, b: &P) -> Ordering {
        (self.compare_priorities)(a, b)
    }
}

/// Assembles an [`FnBehavior`] one function at a time
///
/// All six functions are required. [`build`](Self::build) and
/// [`build_behavior`](Self::build_behavior) report the first missing one
/// as [`QueueError::NullArgument`].
pub struct QueueBuilder<T, P> {
    copy_element: Option<CopyFn<T>>,
    free_element: Option<FreeFn<T>>,
    equal_elements: Option<EqualFn<T>>,
    copy_priority: Option<CopyFn<P>>,
    free_priority: Option<FreeFn<P>>,
    compare_priorities: Option<CompareFn<P>>,
}

impl<T, P> Default for QueueBuilder<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> fmt::Debug for QueueBuilder<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueBuilder")
            .field("copy_element", &self.copy_element.is_some())
            .field("free_element", &self.free_element.is_some())
            .field("equal_elements", &self.equal_elements.is_some())
            .field("copy_priority", &self.copy_priority.is_some())
            .field("free_priority", &self.free_priority.is_some())
            .field("compare_priorities", &self.compare_priorities.is_some())
            .finish()
    }
}

impl<T, P> QueueBuilder<T, P> {
    /// Creates a builder with every slot empty
    pub fn new() -> Self {
        Self {
            copy_element: None,
            free_element: None,
            equal_elements: None,
            copy_priority: None,
            free_priority: None,
            compare_priorities: None,
        }
    }

    pub fn copy_element(mut self, f: impl Fn(&T) -> Option<T> + 'static) -> Self {
        self.copy_element = Some(Box::new(f));
        self
    }

    pub fn free_element(mut self, f: impl Fn(T) + 'static) -> Self {
        self.free_element = Some(Box::new(f));
        self
    }

    pub fn equal_elements(mut self, f: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.equal_elements = Some(Box::new(f));
        self
    }

    pub fn copy_priority(mut self, f: impl Fn(&P) -> Option<P> + 'static) -> Self {
        self.copy_priority = Some(Box::new(f));
        self
    }

    pub fn free_priority(mut self, f: impl Fn(P) + 'static) -> Self {
        self.free_priority = Some(Box::new(f));
        self
    }

    pub fn compare_priorities(mut self, f: impl Fn(&P, &P) -> Ordering + 'static) -> Self {
        self.compare_priorities = Some(Box::new(f));
        self
    }

    /// Produces the behavior, or names the first missing function
    pub fn build_behavior(self) -> Result<FnBehavior<T, P>> {
        Ok(FnBehavior {
            copy_element: self
                .copy_element
                .ok_or(QueueError::NullArgument("copy_element"))?,
            free_element: self
                .free_element
                .ok_or(QueueError::NullArgument("free_element"))?,
            equal_elements: self
                .equal_elements
                .ok_or(QueueError::NullArgument("equal_elements"))?,
            copy_priority: self
                .copy_priority
                .ok_or(QueueError::NullArgument("copy_priority"))?,
            free_priority: self
                .free_priority
                .ok_or(QueueError::NullArgument("free_priority"))?,
            compare_priorities: self
                .compare_priorities
                .ok_or(QueueError::NullArgument("compare_priorities"))?,
        })
    }

    /// Produces an empty queue driven by the assembled behavior
    pub fn build(self) -> Result<PriorityQueue<FnBehavior<T, P>>> {
        self.build_behavior().map(PriorityQueue::new)
    }
}
