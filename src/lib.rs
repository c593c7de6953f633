//! Array-backed binary heap priority queue
//!
//! This crate provides a classic array-backed binary heap over `i64` keys,
//! together with an in-place heapsort built on the same sift-down primitive.
//!
//! # Features
//!
//! - **[`ArrayHeap`]**: a growable binary heap whose ordering direction
//!   ([`Order::Min`] or [`Order::Max`]) is fixed at construction
//! - **Bulk construction**: [`ArrayHeap::from_unordered`] heapifies an
//!   arbitrary vector bottom-up in O(n), not by repeated insertion
//! - **[`heapsort::heap_sort`]**: in-place, O(1)-extra-space ascending sort
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `push`           | O(log n)   |
//! | `pop`            | O(log n)   |
//! | `peek`           | O(1)       |
//! | `from_unordered` | O(n)       |
//! | `heap_sort`      | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use array_heap::{ArrayHeap, Order};
//!
//! let mut heap = ArrayHeap::new(Order::Min);
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//!
//! assert_eq!(heap.peek(), Some(3));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod binary;
pub mod heapsort;

// Re-export the main types for convenience
pub use binary::{ArrayHeap, Order};
