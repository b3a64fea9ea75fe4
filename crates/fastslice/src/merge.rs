//! Parallel bisection merge.
//!
//! ## Purpose
//!
//! This module merges two sorted ranges into a disjoint output by recursive
//! bisection: pick the longer input, split it at its midpoint, binary-search
//! the matching split in the shorter input, and merge the two halves as
//! fork/join siblings. Leaves below the serial cutoff run the two-pointer
//! relocating merge from `slicekit`.
//!
//! ## Key concepts
//!
//! * **Asymmetric bound search**: When the *left* input is bisected, the
//!   split in the right input is its `lower_bound` (first element not less
//!   than the pivot); when the *right* input is bisected, the split in the
//!   left input is its `upper_bound` (first element the pivot is less
//!   than). The asymmetry keeps every tie resolving toward the left input
//!   across the parallel split, which is what preserves stability.
//!
//! ## Invariants
//!
//! * Inputs are sorted under `compare`; the output region overlaps neither
//!   input.
//! * Sibling sub-merges read disjoint input halves and write disjoint
//!   output halves.

// External dependencies
use core::cmp::Ordering;
use core::slice;

// Export dependencies from slicekit
use slicekit::kernels::merge::merge_move;

// Internal dependencies
use crate::raw::SharedPtr;

// Cutoff below which the merge defaults to serial execution.
const MERGE_SERIAL_CUTOFF: usize = 1000;

/// Merge sorted `[a, a + a_len)` and `[b, b + b_len)` into `out`,
/// relocating every element.
///
/// # Safety
///
/// Same contract as [`merge_move`], plus: no other task may access any of
/// the three regions for the duration of the call.
pub(crate) unsafe fn parallel_merge<T, F>(
    a: SharedPtr<T>,
    a_len: usize,
    b: SharedPtr<T>,
    b_len: usize,
    out: SharedPtr<T>,
    compare: &F,
) where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if a_len + b_len < MERGE_SERIAL_CUTOFF {
        // SAFETY: forwarded from the caller's contract.
        unsafe { merge_move(a.get(), a_len, b.get(), b_len, out.get(), compare) };
        return;
    }

    // Bisect the longer input and find the matching split in the other.
    let (a_mid, b_mid) = if a_len > b_len {
        let a_mid = a_len - a_len / 2;
        // SAFETY: a_mid < a_len, and this task has exclusive access to both
        // input regions; the borrow ends before the sub-merges run.
        let pivot = unsafe { &*a.get().add(a_mid) };
        let b_view = unsafe { slice::from_raw_parts(b.get() as *const T, b_len) };
        let b_mid = b_view.partition_point(|e| compare(e, pivot) == Ordering::Less);
        (a_mid, b_mid)
    } else {
        let b_mid = b_len / 2;
        // SAFETY: b_mid < b_len (b_len >= a_len and the total is above the
        // cutoff, so b is non-empty); exclusive access as above.
        let pivot = unsafe { &*b.get().add(b_mid) };
        let a_view = unsafe { slice::from_raw_parts(a.get() as *const T, a_len) };
        let a_mid = a_view.partition_point(|e| compare(pivot, e) != Ordering::Less);
        (a_mid, b_mid)
    };

    rayon::join(
        // SAFETY: the left sub-merge owns a[..a_mid], b[..b_mid], and
        // out[..a_mid + b_mid]; the right sub-merge owns the complements.
        || unsafe { parallel_merge(a, a_mid, b, b_mid, out, compare) },
        || unsafe {
            parallel_merge(
                a.add(a_mid),
                a_len - a_mid,
                b.add(b_mid),
                b_len - b_mid,
                out.add(a_mid + b_mid),
                compare,
            )
        },
    );
}
