//! Parallel stable sort.
//!
//! ## Purpose
//!
//! A recursive merge sort over a primary slice and a single shadow buffer
//! of equal length. Each recursive call sorts its range and reports *where*
//! the sorted run ended up (in the range itself or in the scratch buffer),
//! and the parent merges the two halves into whichever buffer lets it avoid
//! moving data that is already in place. The top level relocates the final
//! run back into the primary slice if it finished in the scratch.
//!
//! ## Design notes
//!
//! * **Ping-pong flag**: The location report is the two-variant
//!   [`SortedIn`] enum so the four child combinations are handled
//!   exhaustively instead of through boolean arithmetic.
//! * **Move discipline**: Elements relocate bitwise between the buffers.
//!   The primary slice keeps logical ownership throughout: the scratch
//!   never runs destructors, so a comparator panic can leak parked
//!   elements but never double-drop one.
//! * **Stability**: Left-first recursion plus the left-preferring merge
//!   tie-break keep equal elements in input order.
//!
//! ## Invariants
//!
//! * Range and scratch regions passed to a recursive call are the same
//!   length and never overlap.
//! * Sibling calls receive disjoint halves of both regions.

// External dependencies
use core::cmp::Ordering;
use core::slice;

// Export dependencies from slicekit
use slicekit::kernels::sort as serial_sort;
use slicekit::primitives::errors::SliceError;
use slicekit::primitives::scratch::ScratchBuffer;

// Internal dependencies
use crate::input::SliceInputMut;
use crate::merge::parallel_merge;
use crate::raw::{relocate, SharedPtr};

// Cutoff below which the sort routine defaults to serial execution.
const SORT_SERIAL_CUTOFF: usize = 4000;

// ============================================================================
// Location Flag
// ============================================================================

/// Where a recursive call left its sorted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortedIn {
    /// The sorted run is in the original range; the scratch is clobbered.
    Range,
    /// The sorted run is in the scratch region; the range is clobbered.
    Scratch,
}

// ============================================================================
// Recursive Merge Sort
// ============================================================================

/// Sort `[v, v + len)` using `[out, out + len)` as scratch, and report
/// which of the two regions holds the sorted run.
///
/// # Safety
///
/// * `v` and `out` must each be valid for `len` element accesses, must not
///   overlap, and must be untouched by other tasks for the duration.
/// * `[v, v + len)` must hold initialized elements. Afterwards the region
///   named by the return value holds them all; the other is clobbered.
unsafe fn merge_sort<T, F>(
    v: SharedPtr<T>,
    out: SharedPtr<T>,
    len: usize,
    compare: &F,
) -> SortedIn
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let half = len / 2;

    // Sort both halves serially once they are small enough, then do one
    // parallel merge into the scratch.
    if half <= SORT_SERIAL_CUTOFF {
        // SAFETY: this task has exclusive access to [v, v + len); the two
        // halves are disjoint, and the borrows end before the merge.
        unsafe {
            let lo = slice::from_raw_parts_mut(v.get(), half);
            let hi = slice::from_raw_parts_mut(v.get().add(half), len - half);
            serial_sort::stable_sort_by(lo, compare);
            serial_sort::stable_sort_by(hi, compare);
            parallel_merge(v, half, v.add(half), len - half, out, compare);
        }
        return SortedIn::Scratch;
    }

    // SAFETY: siblings own disjoint halves of both regions.
    let (r1, r2) = rayon::join(
        || unsafe { merge_sort(v, out, half, compare) },
        || unsafe { merge_sort(v.add(half), out.add(half), len - half, compare) },
    );

    // Merge the halves into whichever buffer avoids redundant moves; when
    // the children disagree, first bring the range-resident half over to
    // the scratch so both halves merge from the same buffer.
    //
    // SAFETY: all regions below are sub-regions this call owns; merge
    // inputs never overlap their output.
    unsafe {
        match (r1, r2) {
            (SortedIn::Range, SortedIn::Range) => {
                parallel_merge(v, half, v.add(half), len - half, out, compare);
                SortedIn::Scratch
            }
            (SortedIn::Scratch, SortedIn::Scratch) => {
                parallel_merge(out, half, out.add(half), len - half, v, compare);
                SortedIn::Range
            }
            (SortedIn::Scratch, SortedIn::Range) => {
                relocate(v.add(half), out.add(half), len - half);
                parallel_merge(out, half, out.add(half), len - half, v, compare);
                SortedIn::Range
            }
            (SortedIn::Range, SortedIn::Scratch) => {
                relocate(v, out, half);
                parallel_merge(out, half, out.add(half), len - half, v, compare);
                SortedIn::Range
            }
        }
    }
}

// ============================================================================
// Public Entry Points
// ============================================================================

/// Stable-sort `data` in parallel under `compare`.
///
/// Equivalent to the canonical stable sort: equal elements retain their
/// relative input order. Allocates a shadow buffer of the same length as
/// the input; the buffer is released on every exit path.
///
/// # Example
///
/// ```rust
/// use fastslice::prelude::*;
///
/// let mut data = vec![3_i32, -1, 2, -1];
/// stable_sort_by(&mut data, |a: &i32, b: &i32| a.abs().cmp(&b.abs()))?;
/// assert_eq!(data, [-1, -1, 2, 3]);
/// # Result::<(), SliceError>::Ok(())
/// ```
pub fn stable_sort_by<T, A, F>(data: &mut A, compare: F) -> Result<(), SliceError>
where
    T: Send,
    A: SliceInputMut<T> + ?Sized,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let v = data.as_algo_slice_mut()?;
    let len = v.len();

    if len < SORT_SERIAL_CUTOFF {
        serial_sort::stable_sort_by(v, &compare);
        return Ok(());
    }

    let mut scratch = ScratchBuffer::new(len);
    let base = SharedPtr::new(v.as_mut_ptr());
    let out = SharedPtr::new(scratch.as_mut_ptr());

    // SAFETY: `base` and `out` are distinct allocations of `len` elements;
    // the slice holds initialized elements and the scratch is raw storage
    // that never drops, so ownership stays with the slice.
    unsafe {
        if merge_sort(base, out, len, &compare) == SortedIn::Scratch {
            relocate(out, base, len);
        }
    }
    Ok(())
}

/// Stable-sort `data` in parallel by the natural order of `T`.
pub fn stable_sort<T, A>(data: &mut A) -> Result<(), SliceError>
where
    T: Ord + Send,
    A: SliceInputMut<T> + ?Sized,
{
    stable_sort_by(data, T::cmp)
}
