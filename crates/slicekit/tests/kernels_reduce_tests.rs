//! Tests for the serial reductions.
//!
//! These tests verify the index-tracking extrema and the counters:
//! - Tie-breaking to the lowest index
//! - Agreement with the standard library scans
//! - Empty inputs

use slicekit::kernels::reduce::{count, count_if, max_by_index, min_by_index};

/// Test that extrema report the position of the extreme element.
#[test]
fn test_extrema_basic() {
    let v = vec![5, 2, 9, 1, 7];
    assert_eq!(min_by_index(&v, &i32::cmp), Some(3));
    assert_eq!(max_by_index(&v, &i32::cmp), Some(2));
}

/// Test that duplicated extrema resolve to the lowest index.
#[test]
fn test_extrema_ties_take_first() {
    let v = vec![4, 1, 3, 1, 4];
    assert_eq!(min_by_index(&v, &i32::cmp), Some(1));
    assert_eq!(max_by_index(&v, &i32::cmp), Some(0));
}

/// Test extrema under a reversing comparator.
#[test]
fn test_extrema_custom_comparator() {
    let v = vec![5, 2, 9, 1, 7];
    let reversed = |a: &i32, b: &i32| b.cmp(a);
    assert_eq!(min_by_index(&v, &reversed), Some(2));
    assert_eq!(max_by_index(&v, &reversed), Some(3));
}

/// Test that empty slices report no extremum.
#[test]
fn test_extrema_empty() {
    let v: Vec<i32> = vec![];
    assert_eq!(min_by_index(&v, &i32::cmp), None);
    assert_eq!(max_by_index(&v, &i32::cmp), None);
}

/// Test value and predicate counting against iterator references.
#[test]
fn test_counting() {
    let v = vec![1, 2, 2, 3, 2, 4];
    assert_eq!(count(&v, &2), 3);
    assert_eq!(count(&v, &9), 0);
    assert_eq!(count_if(&v, &|x: &i32| x % 2 == 0), 4);
    assert_eq!(count_if::<i32, _>(&[], &|_| true), 0);
}
