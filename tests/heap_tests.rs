//! Integration tests for the heap, its index helpers, and heapsort.
//!
//! These exercise the public surface the way an embedding application
//! would, with fixed fixtures whose expected layouts are written out in
//! full.

use heapsorter::index::{
    item_has_child_in_tree, left_child_index, parent_index, right_child_index, Child,
};
use heapsorter::{heapsort, is_heap, MaxHeap};

#[test]
fn child_index_calculations() {
    let parents = [0i64, 1, 2, 3, 4, 5];
    let left_children = [1i64, 3, 5, 7, 9, 11];
    let right_children = [2i64, 4, 6, 8, 10, 12];

    for i in 0..parents.len() {
        assert_eq!(left_child_index(parents[i]), left_children[i]);
        assert_eq!(right_child_index(parents[i]), right_children[i]);
    }
}

#[test]
fn parent_index_calculations() {
    let children = [0i64, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let parents = [-1i64, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4];

    for i in 0..children.len() {
        assert_eq!(parent_index(children[i]), parents[i]);
    }

    // the root already is a parent, as is anything below index 0
    assert_eq!(parent_index(0), -1);
    assert_eq!(parent_index(-1), -1);
}

#[test]
fn child_existence_against_six_node_tree() {
    // tree node indices range over 0..=5; index 2 has a left child only
    let max_idx = 5.0;

    for target in 0..10 {
        let idx = f64::from(target);
        let has_left = item_has_child_in_tree(idx, max_idx, Child::Left);
        let has_right = item_has_child_in_tree(idx, max_idx, Child::Right);

        if target < 2 {
            assert_eq!(has_left, Some(true));
            assert_eq!(has_right, Some(true));
        } else if target == 2 {
            assert_eq!(has_left, Some(true));
            assert_eq!(has_right, Some(false));
        } else {
            assert_eq!(has_left, Some(false));
            assert_eq!(has_right, Some(false));
        }
    }
}

#[test]
fn heap_validity_scan() {
    let ascending = [1.0, 2.0, 3.0, 4.0, 5.0];
    let descending = [5.0, 4.0, 3.0, 2.0, 1.0];
    let valid_twelve = [15.0, 11.0, 10.0, 7.0, 5.0, 9.0, 2.0, 6.0, 4.0, 3.0, 1.0, 8.0];
    let invalid_twelve = [7.0, 1.0, 10.0, 4.0, 6.0, 9.0, 2.0, 11.0, 3.0, 5.0, 12.0, 8.0];

    assert!(!is_heap(&ascending));
    assert!(is_heap(&descending));
    assert!(is_heap(&valid_twelve));
    assert!(!is_heap(&invalid_twelve));
    assert!(is_heap(&[3.0]));
    assert!(is_heap(&[10.0, 5.0]));
    assert!(is_heap(&[10.0, 5.0, 1.0]));
    assert!(is_heap(&[]));
}

#[test]
fn insertion_maintains_heap_at_every_step() {
    let mut heap = MaxHeap::new();

    heap.push(15.0);
    assert!(is_heap(heap.as_slice()));
    assert_eq!(heap.as_slice(), [15.0]);

    heap.push(10.0);
    assert_eq!(heap.as_slice(), [15.0, 10.0]);

    heap.push(5.0);
    assert_eq!(heap.as_slice(), [15.0, 10.0, 5.0]);

    heap.push(20.0);
    heap.push(0.0);
    heap.push(25.0);
    assert_eq!(heap.as_slice(), [25.0, 15.0, 20.0, 10.0, 0.0, 5.0]);
    assert!(is_heap(heap.as_slice()));
}

#[test]
fn removal_always_yields_current_maximum() {
    let mut heap = MaxHeap::new();
    for v in [15.0, 10.0, 5.0, 20.0, 0.0, 25.0] {
        heap.push(v);
    }

    let mut expected = vec![25.0, 20.0, 15.0, 10.0, 5.0, 0.0];
    for want in expected.drain(..) {
        let len_before = heap.len();
        assert_eq!(heap.pop(), Some(want));
        assert_eq!(heap.len(), len_before - 1);
        assert!(is_heap(heap.as_slice()));
    }

    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

#[test]
fn swap_items_in_backing_array() {
    let mut heap = MaxHeap::new();
    // pushing descending values keeps the layout in push order
    for v in [4.0, 3.0, 2.0, 1.0, 0.0] {
        heap.push(v);
    }
    assert_eq!(heap.as_slice(), [4.0, 3.0, 2.0, 1.0, 0.0]);

    heap.swap_items(1, 3);
    assert_eq!(heap.as_slice(), [4.0, 1.0, 2.0, 3.0, 0.0]);

    heap.swap_items(1, 3);
    assert_eq!(heap.as_slice(), [4.0, 3.0, 2.0, 1.0, 0.0]);
}

#[test]
fn heapsort_sample_fixture() {
    let mut values = [4.0, 2.0, 6.0, 1.0, 3.0, 5.0, 7.0];
    heapsort(&mut values);
    assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn heapsort_empty_input() {
    let mut values: Vec<f64> = Vec::new();
    heapsort(&mut values);
    assert!(values.is_empty());
}

#[test]
fn heapsort_already_sorted_input_is_unchanged() {
    let mut values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    heapsort(&mut values);
    assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn heapsort_reverse_sorted_input() {
    let mut values = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
    heapsort(&mut values);
    assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}
