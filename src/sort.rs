//! In-place heapsort over a caller-supplied slice.
//!
//! These are free functions, deliberately decoupled from [`MaxHeap`]
//! instance state: they operate on any slice the caller owns, allocate
//! nothing, and are reentrant as long as the same slice is not shared
//! across concurrent calls.
//!
//! The heapify strategy is a single leaf-to-root sweep repeated fresh on
//! every outer iteration. That is O(n) per extraction instead of the
//! O(log n) a one-time linear-time build plus root sift-down would give;
//! the quadratic shape is retained intentionally for behavioral
//! compatibility.
//!
//! [`MaxHeap`]: crate::heap::MaxHeap

/// Sorts the slice ascending, in place, by repeated heapify-and-extract.
///
/// For each `last_idx` from `len - 1` down to 1, the range `[0, last_idx]`
/// is restored to max-heap order and the maximum at position 0 is swapped
/// out to `last_idx`. No auxiliary storage is allocated.
///
/// ```rust
/// use heapsorter::heapsort;
///
/// let mut values = [4.0, 2.0, 6.0, 1.0, 3.0, 5.0, 7.0];
/// heapsort(&mut values);
/// assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
/// ```
pub fn heapsort(items: &mut [f64]) {
    for last_idx in (1..items.len()).rev() {
        make_heap(items, last_idx);
        items.swap(0, last_idx);
    }
}

/// Restores max-heap order over `items[0..=end_idx]` with one leaf-to-root
/// sweep: each position is swapped with its parent when it holds the larger
/// value. `end_idx == 0` is a no-op.
///
/// One sweep does not fully heapify an arbitrary array; [`heapsort`] relies
/// on invoking it once per outer iteration.
pub fn make_heap(items: &mut [f64], end_idx: usize) {
    if end_idx == 0 {
        return;
    }

    // index 0 has no parent, so the sweep stops at 1
    for child_idx in (1..=end_idx).rev() {
        let parent_idx = (child_idx - 1) / 2;
        if items[child_idx] > items[parent_idx] {
            items.swap(child_idx, parent_idx);
        }
    }
}
