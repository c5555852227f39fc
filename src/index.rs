//! Index arithmetic for the array layout of a binary heap.
//!
//! A binary heap stores its tree in level order: the root lives at index 0,
//! and the children of the node at index `p` live at `2p + 1` and `2p + 2`.
//!
//! ```text
//!                 0
//!         1               2
//!     3       4       5       6
//!   7   8   9  10   11  12  13  14
//! ```
//!
//! Everything in this module is a pure function over indices; no heap state
//! is involved. Indices are `i64` so that the `-1` "no parent" sentinel and
//! negative inputs are representable.

/// Which child of a node to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    Left,
    Right,
}

/// Returns the index of the left child of `parent_index`.
///
/// No bounds checking is performed; if existence matters, check
/// [`item_has_child_in_tree`] first.
///
/// ```rust
/// use heapsorter::index::left_child_index;
/// assert_eq!(left_child_index(0), 1);
/// assert_eq!(left_child_index(4), 9);
/// ```
#[inline]
pub fn left_child_index(parent_index: i64) -> i64 {
    2 * parent_index + 1
}

/// Returns the index of the right child of `parent_index`.
///
/// Same contract as [`left_child_index`]: no bounds checking.
///
/// ```rust
/// use heapsorter::index::right_child_index;
/// assert_eq!(right_child_index(0), 2);
/// assert_eq!(right_child_index(4), 10);
/// ```
#[inline]
pub fn right_child_index(parent_index: i64) -> i64 {
    2 * parent_index + 2
}

/// Returns the index of the parent of `child_index`, or `-1` if the node
/// has no parent.
///
/// The root (index 0) and any negative index map to `-1`.
///
/// ```rust
/// use heapsorter::index::parent_index;
/// assert_eq!(parent_index(9), 4);
/// assert_eq!(parent_index(10), 4);
/// assert_eq!(parent_index(0), -1);
/// assert_eq!(parent_index(-3), -1);
/// ```
#[inline]
pub fn parent_index(child_index: i64) -> i64 {
    if child_index < 1 {
        return -1;
    }
    // child_index >= 1, so truncating division is floor division
    (child_index - 1) / 2
}

/// Coerces a value to a usable number, rejecting the not-a-number sentinel.
///
/// Heap values travel as `f64`, with NaN standing in for "not a number".
/// Callers that receive `None` must branch on it rather than feed the
/// sentinel into arithmetic.
#[inline]
pub fn to_number(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value)
}

/// Checks whether the node at `item_idx` has the given child within a tree
/// whose last valid index is `max_idx`.
///
/// Both indices pass through [`to_number`] so the not-a-number sentinel can
/// flow through this check; if either index is NaN the result is `None`
/// rather than a boolean. A `max_idx` of `-1.0` describes an empty array,
/// for which every non-negative node has no children.
///
/// ```rust
/// use heapsorter::index::{item_has_child_in_tree, Child};
///
/// // six nodes, indices 0..=5
/// assert_eq!(item_has_child_in_tree(1.0, 5.0, Child::Right), Some(true));
/// assert_eq!(item_has_child_in_tree(2.0, 5.0, Child::Left), Some(true));
/// assert_eq!(item_has_child_in_tree(2.0, 5.0, Child::Right), Some(false));
/// assert_eq!(item_has_child_in_tree(f64::NAN, 5.0, Child::Left), None);
/// ```
pub fn item_has_child_in_tree(item_idx: f64, max_idx: f64, which: Child) -> Option<bool> {
    let item = to_number(item_idx)?;
    let max = to_number(max_idx)?;

    let offset = match which {
        Child::Left => 1.0,
        Child::Right => 2.0,
    };
    Some(2.0 * item + offset <= max)
}
