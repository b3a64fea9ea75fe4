//! Tests for the serial search kernels.

use slicekit::kernels::search::{find, is_sorted_by};

/// Test present and absent values, and first-match preference.
#[test]
fn test_find() {
    let v = vec![4, 7, 1, 7, 9];
    assert_eq!(find(&v, &7), Some(1));
    assert_eq!(find(&v, &9), Some(4));
    assert_eq!(find(&v, &5), None);
    assert_eq!(find::<i32>(&[], &5), None);
}

/// Test sortedness over sorted, unsorted, and degenerate inputs.
#[test]
fn test_is_sorted_by() {
    assert!(is_sorted_by(&[1, 2, 2, 3], &i32::cmp));
    assert!(!is_sorted_by(&[1, 3, 2], &i32::cmp));
    assert!(is_sorted_by::<i32, _>(&[], &i32::cmp));
    assert!(is_sorted_by(&[42], &i32::cmp));

    // A reversed comparator flips the accepted order.
    assert!(is_sorted_by(&[3, 2, 1], &|a: &i32, b: &i32| b.cmp(a)));
}
