//! Serial stable sort kernel.
//!
//! The canonical stable sort, used by the parallel merge-sort as the base
//! case once a half falls under the serial cutoff. `slice::sort_by` is the
//! standard library's stable sort, so the wrapper only adapts the borrowed
//! comparator shape shared by the rest of the workspace.

// External dependencies
use core::cmp::Ordering;

/// Stable-sort `v` in place under `compare`.
pub fn stable_sort_by<T, F>(v: &mut [T], compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    v.sort_by(|a, b| compare(a, b));
}
