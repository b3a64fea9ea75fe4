//! Block-strided parallel partition.
//!
//! ## Purpose
//!
//! Reorders a slice in place so every element satisfying the predicate
//! precedes every element that does not, returning the index of the first
//! non-satisfying element. Not stable.
//!
//! ## Key concepts
//!
//! * **Stride tasks**: The slice is viewed as consecutive blocks of
//!   [`STRIDE_COUNT`] elements. For each offset within a block, one task
//!   runs a two-pointer partition restricted to the positions sharing that
//!   offset, stepping by the block width. The residue classes tile the
//!   slice and are pairwise disjoint, so the parallel phase needs no
//!   synchronization at all.
//! * **Uncertain middle**: Each stride task reports a cut index. Below the
//!   smallest cut everything satisfies the predicate and from the largest
//!   cut on nothing does; the region between is partitioned by a final
//!   serial pass whose return value becomes the overall split.
//!
//! The strided phase performs best when the two classes are balanced and
//! spread evenly; heavy skew or clustering widens the uncertain middle and
//! shifts work onto the serial cleanup.

// External dependencies
use core::ptr;
use rayon::prelude::*;

// Export dependencies from slicekit
use slicekit::kernels::partition::partition_in_place;
use slicekit::primitives::errors::SliceError;

// Internal dependencies
use crate::input::SliceInputMut;
use crate::raw::SharedPtr;

// Below this grain size partition defaults to serial execution.
const PARTITION_SERIAL_CUTOFF: usize = 4096;

// Block width; one stride task runs per offset within a block.
const STRIDE_COUNT: usize = 64;

// ============================================================================
// Strided Partition Task
// ============================================================================

/// Two-pointer partition over the positions congruent to `offset` modulo
/// the stride, returning this stride's cut index into the full slice.
///
/// # Safety
///
/// * `base` must be valid for `len` element accesses.
/// * No concurrent task may touch any position congruent to `offset`
///   modulo `len / num_blocks`.
unsafe fn strided_partition<T, P>(
    base: SharedPtr<T>,
    len: usize,
    num_blocks: usize,
    offset: usize,
    pred: &P,
) -> usize
where
    P: Fn(&T) -> bool,
{
    let stride = len / num_blocks;

    // First and last in-range positions of this residue class.
    let mut s = offset;
    let mut e = if num_blocks * stride + offset < len {
        num_blocks * stride + offset
    } else {
        (num_blocks - 1) * stride + offset
    };

    // SAFETY: s and e stay congruent to offset modulo stride and inside
    // [0, len), so every access is in range and owned by this task.
    unsafe {
        while s < e {
            ptr::swap(base.get().add(s), base.get().add(e));
            while s < e && pred(&*base.get().add(s)) {
                s += stride;
            }
            while s < e && !pred(&*base.get().add(e)) {
                e -= stride;
            }
        }

        // The meeting element itself may still satisfy the predicate.
        if pred(&*base.get().add(s)) {
            s + 1
        } else {
            s
        }
    }
}

// ============================================================================
// Public Entry Point
// ============================================================================

/// Partition `data` in place by `pred` in parallel, returning the index of
/// the first element that does not satisfy the predicate.
///
/// The relative order of elements is not preserved. Equivalent in result to
/// the canonical serial partition: `pred` holds for every element before
/// the returned index and for none from it on, and the multiset of
/// elements is unchanged.
///
/// # Example
///
/// ```rust
/// use fastslice::prelude::*;
///
/// let mut data: Vec<u32> = (0..10_000).collect();
/// let split = partition(&mut data, |x| x % 2 == 0)?;
/// assert_eq!(split, 5_000);
/// assert!(data[..split].iter().all(|x| x % 2 == 0));
/// assert!(data[split..].iter().all(|x| x % 2 == 1));
/// # Result::<(), SliceError>::Ok(())
/// ```
pub fn partition<T, A, P>(data: &mut A, pred: P) -> Result<usize, SliceError>
where
    T: Send,
    A: SliceInputMut<T> + ?Sized,
    P: Fn(&T) -> bool + Sync,
{
    let v = data.as_algo_slice_mut()?;
    let len = v.len();

    if len < PARTITION_SERIAL_CUTOFF {
        return Ok(partition_in_place(v, &pred));
    }

    let num_blocks = len / STRIDE_COUNT;
    let base = SharedPtr::new(v.as_mut_ptr());

    // One task per block offset; residue classes are pairwise disjoint.
    let cuts: Vec<usize> = (0..STRIDE_COUNT)
        .into_par_iter()
        // SAFETY: task `offset` only touches positions congruent to
        // `offset` modulo the stride, which no sibling shares.
        .map(|offset| unsafe { strided_partition(base, len, num_blocks, offset, &pred) })
        .collect();

    // Everything left of the smallest cut satisfies the predicate and
    // everything from the largest cut on does not; the middle is uncertain.
    let (left, right) = cuts
        .iter()
        .fold((len, 0), |(lo, hi), &cut| (lo.min(cut), hi.max(cut)));

    let mid = partition_in_place(&mut v[left..right], &pred);
    Ok(left + mid)
}
