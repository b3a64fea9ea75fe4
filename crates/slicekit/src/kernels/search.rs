//! Serial search kernels: linear find and sortedness check.

// External dependencies
use core::cmp::Ordering;

/// Index of the first element equal to `value`, or `None` if absent.
pub fn find<T: PartialEq>(v: &[T], value: &T) -> Option<usize> {
    v.iter().position(|x| x == value)
}

/// Whether `v` is sorted under `compare` (no adjacent pair out of order).
pub fn is_sorted_by<T, F>(v: &[T], compare: &F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    v.windows(2).all(|w| compare(&w[1], &w[0]) != Ordering::Less)
}
