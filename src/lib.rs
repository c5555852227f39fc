//! Array-Backed Binary Max-Heap and Heapsort
//!
//! This crate provides a classic binary max-heap stored in level order over
//! a `Vec`, together with the in-place heapsort transform derived from it.
//!
//! # Features
//!
//! - **`MaxHeap`**: O(log n) insert and extract-max over an owned array
//! - **`heapsort`**: in-place ascending sort of any `f64` slice, no
//!   auxiliary allocation
//! - **Index arithmetic**: the parent/child mappings of the array layout,
//!   exposed as standalone pure functions
//! - **`is_heap`**: O(n) validity scan, usable against any slice
//!
//! Values are `f64` rather than generic `Ord` items; NaN serves as the
//! crate's not-a-number sentinel and loses every ordering comparison, so it
//! can flow through without ever displacing a real value.
//!
//! # Example
//!
//! ```rust
//! use heapsorter::{heapsort, MaxHeap};
//!
//! let mut heap = MaxHeap::new();
//! heap.push(15.0);
//! heap.push(25.0);
//! heap.push(10.0);
//! assert_eq!(heap.pop(), Some(25.0));
//!
//! let mut values = [4.0, 2.0, 6.0, 1.0, 3.0, 5.0, 7.0];
//! heapsort(&mut values);
//! assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
//! ```
//!
//! The heap is single-threaded and unsynchronized; embed it behind a lock
//! if shared. `heapsort` touches nothing but the slice it is handed.

pub mod heap;
pub mod index;
pub mod sort;

// Re-export the main surface for convenience
pub use heap::{is_heap, MaxHeap};
pub use sort::{heapsort, make_heap};
