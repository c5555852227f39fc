//! Array-backed binary max-heap.
//!
//! [`MaxHeap`] owns a level-order `Vec<f64>` and maintains the max-heap
//! invariant across every public mutating operation: each node's value is
//! greater than or equal to both of its children's values. The invariant may
//! be violated mid-sift inside a single call, but is restored before the
//! call returns.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use heapsorter::MaxHeap;
//!
//! let mut heap = MaxHeap::new();
//! heap.push(3.0);
//! heap.push(7.0);
//! heap.push(5.0);
//!
//! assert_eq!(heap.peek(), Some(7.0));
//! assert_eq!(heap.pop(), Some(7.0));
//! assert_eq!(heap.pop(), Some(5.0));
//! assert_eq!(heap.pop(), Some(3.0));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::index::{
    item_has_child_in_tree, left_child_index, parent_index, right_child_index, to_number, Child,
};

/// An array-backed binary max-heap of `f64` values.
///
/// Values are plain numbers rather than generic `Ord` items; NaN acts as the
/// not-a-number sentinel for failed coercions (see [`crate::index::to_number`])
/// and, losing every comparison, sinks wherever it was appended.
#[derive(Debug, Clone, Default)]
pub struct MaxHeap {
    /// Level-order backing storage, root at index 0.
    items: Vec<f64>,
}

impl MaxHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of values in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum value without removing it.
    pub fn peek(&self) -> Option<f64> {
        self.items.first().copied()
    }

    /// The backing storage in level order.
    pub fn as_slice(&self) -> &[f64] {
        &self.items
    }

    /// Inserts a value and restores the heap invariant by sifting up.
    ///
    /// The value is coerced through [`to_number`] first; a failed coercion
    /// appends the NaN sentinel itself, which callers supplying only real
    /// numbers never observe. The sift walks the full path from the new
    /// leaf to the root, comparing at every level, swapping whenever the
    /// lower value exceeds its parent.
    pub fn push(&mut self, value: f64) {
        let num = to_number(value).unwrap_or(f64::NAN);
        self.items.push(num);

        let mut idx = self.items.len() as i64 - 1;
        let mut parent = parent_index(idx);
        while parent > -1 {
            if self.items[idx as usize] > self.items[parent as usize] {
                self.swap_items(idx as usize, parent as usize);
            }
            idx = parent;
            parent = parent_index(idx);
        }
    }

    /// Removes and returns the maximum value, or `None` if the heap is empty.
    ///
    /// The last value moves into the root slot and sifts down: at each level
    /// the larger child is selected, swapped in if it beats the current
    /// value, and the walk continues along that child's subtree until no
    /// left child remains in range.
    pub fn pop(&mut self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }
        if self.items.len() == 1 {
            return self.items.pop();
        }

        // removes index 0 and moves the last element into its place
        let top = self.items.swap_remove(0);

        let max_idx = self.items.len() as i64 - 1;
        let mut curr = 0i64;
        while item_has_child_in_tree(curr as f64, max_idx as f64, Child::Left) == Some(true) {
            let mut selected = left_child_index(curr);
            if item_has_child_in_tree(curr as f64, max_idx as f64, Child::Right) == Some(true) {
                let right = right_child_index(curr);
                // ties and NaN on the left both select the right child
                if !(self.items[selected as usize] > self.items[right as usize]) {
                    selected = right;
                }
            }
            if self.items[selected as usize] > self.items[curr as usize] {
                self.swap_items(selected as usize, curr as usize);
            }
            curr = selected;
        }

        Some(top)
    }

    /// Exchanges the values at positions `i` and `j` unconditionally.
    ///
    /// No bounds validation is performed; an out-of-range index is a caller
    /// bug and panics.
    pub fn swap_items(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }
}

/// Checks whether `items` is in valid max-heap order. Runs in O(n).
///
/// Scans in level order from the root, comparing each node against its
/// in-range children. Empty and single-value slices are trivially heaps.
///
/// ```rust
/// use heapsorter::is_heap;
///
/// assert!(is_heap(&[5.0, 4.0, 3.0, 2.0, 1.0]));
/// assert!(!is_heap(&[1.0, 2.0, 3.0]));
/// assert!(is_heap(&[]));
/// ```
pub fn is_heap(items: &[f64]) -> bool {
    let max_idx = items.len() as i64 - 1;
    let mut curr = 0i64;

    while curr <= max_idx
        && item_has_child_in_tree(curr as f64, max_idx as f64, Child::Left) == Some(true)
    {
        let left = left_child_index(curr);
        if items[curr as usize] < items[left as usize] {
            return false;
        }

        let right = right_child_index(curr);
        if right <= max_idx && items[curr as usize] < items[right as usize] {
            return false;
        }

        curr += 1;
    }

    true
}
