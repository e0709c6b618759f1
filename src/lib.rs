//! Linked Priority Queue
//!
//! A priority queue kept as a singly linked sequence of nodes sorted by
//! priority, highest first. The element and priority types are opaque to
//! the queue: copying, releasing, equality and ordering are delegated to a
//! [`QueueBehavior`] fixed when the queue is created.
//!
//! # Features
//!
//! - **Stable ordering**: equal priorities are served in insertion order,
//!   and later inserts or removals never reorder an existing band
//! - **Owned copies**: [`PriorityQueue::insert`] stores copies made by the
//!   behavior and releases them through the behavior's free functions
//! - **Atomic failures**: a failed copy leaves the queue exactly as it was
//! - **Checked traversal**: [`Cursor`] detects mutation since it started;
//!   [`Iter`] rules it out at compile time
//!
//! Every operation except head access is an O(n) walk. The queue is not a
//! heap and makes no asymptotic promises beyond that.
//!
//! # Example
//!
//! ```rust
//! use linked_priority_queue::{Natural, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new(Natural::<&str, u32>::new());
//! queue.insert(&"low", &1).unwrap();
//! queue.insert(&"first", &5).unwrap();
//! queue.insert(&"second", &5).unwrap();
//!
//! assert_eq!(queue.get_first(), Some(&"first"));
//! assert_eq!(queue.get_next(), Some(&"second"));
//! assert_eq!(queue.get_next(), Some(&"low"));
//! assert_eq!(queue.get_next(), None);
//! ```

pub mod behavior;
pub mod cursor;
pub mod queue;
pub mod storage;
pub mod traits;

pub use behavior::{FnBehavior, Natural, QueueBuilder};
pub use cursor::{Cursor, Iter};
pub use queue::PriorityQueue;
pub use traits::{QueueBehavior, QueueError, Result};
