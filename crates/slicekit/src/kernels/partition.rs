//! Serial in-place partition.
//!
//! ## Purpose
//!
//! This module implements the canonical single-threaded partition: reorder a
//! slice so every element satisfying the predicate precedes every element
//! that does not, and return the index of the first non-satisfying element.
//! It serves as the sub-grain fallback of the parallel partition and as the
//! serial cleanup pass over the uncertain middle region left between the
//! stride cuts.
//!
//! ## Key concepts
//!
//! * **Two-pointer sweep**: A left cursor skips satisfying elements, a right
//!   cursor skips non-satisfying ones, and the two misplaced elements they
//!   stop on are swapped. Not stable.

/// Partition `v` in place by `pred`, returning the index of the first
/// element that does not satisfy the predicate (equal to `v.len()` when
/// every element satisfies it).
pub fn partition_in_place<T, P>(v: &mut [T], pred: &P) -> usize
where
    P: Fn(&T) -> bool,
{
    let mut left = 0;
    let mut right = v.len();

    while left < right {
        while left < right && pred(&v[left]) {
            left += 1;
        }
        while left < right && !pred(&v[right - 1]) {
            right -= 1;
        }
        // Both cursors stopped on misplaced elements, so right - left >= 2.
        if left < right {
            v.swap(left, right - 1);
            left += 1;
            right -= 1;
        }
    }

    left
}
