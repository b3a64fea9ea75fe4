//! Parallel rotations.
//!
//! ## Purpose
//!
//! Two implementations of the canonical rotate: make the element at `mid`
//! the new front and return the index where the old front landed
//! (`len - mid`). The buffered variant parks one segment in scratch storage
//! and performs three parallel bulk moves; the in-place variant performs
//! three parallel reversals and no allocation.
//!
//! ## Key concepts
//!
//! * **Segment choice**: With `a = mid` and `b = len - mid`, the left
//!   segment is buffered only when `a > len / 2`; otherwise the right
//!   segment is. In either branch the in-slice shift moves between
//!   disjoint regions (the smaller segment travels across the larger
//!   one's width), so all three bulk moves may run chunked in parallel.
//! * **Reversal rotate**: Reversing both segments in parallel and then the
//!   whole slice is the classic three-reversal identity; each reversal is
//!   `len / 2` independent pairwise swaps.

// External dependencies
use core::mem;
use rayon::prelude::*;

// Export dependencies from slicekit
use slicekit::primitives::errors::SliceError;
use slicekit::primitives::scratch::ScratchBuffer;
use slicekit::primitives::validate::Validator;

// Internal dependencies
use crate::input::SliceInputMut;
use crate::raw::{relocate, SharedPtr};

// ============================================================================
// Buffered Rotate
// ============================================================================

/// Rotate `data` so the element at `mid` becomes the first, using a scratch
/// buffer for one segment. Returns the new index of the element that was
/// originally first (`len - mid`).
///
/// # Example
///
/// ```rust
/// use fastslice::prelude::*;
///
/// let mut data = vec![0, 1, 2, 3, 4];
/// let pivot = rotate(&mut data, 2)?;
/// assert_eq!(data, [2, 3, 4, 0, 1]);
/// assert_eq!(pivot, 3);
/// # Result::<(), SliceError>::Ok(())
/// ```
pub fn rotate<T, A>(data: &mut A, mid: usize) -> Result<usize, SliceError>
where
    T: Send,
    A: SliceInputMut<T> + ?Sized,
{
    let v = data.as_algo_slice_mut()?;
    let len = v.len();
    Validator::midpoint(mid, len)?;

    let a = mid;
    let b = len - mid;
    if a == 0 || b == 0 {
        return Ok(b);
    }

    let base = SharedPtr::new(v.as_mut_ptr());

    if a <= len / 2 {
        // Park the right segment, slide the left one over, unpark in front.
        let mut scratch = ScratchBuffer::new(b);
        let parked = SharedPtr::new(scratch.as_mut_ptr());
        // SAFETY: the scratch is a distinct allocation of b slots, and the
        // in-slice shift [0, a) -> [b, b + a) is between disjoint regions
        // because a <= b in this branch.
        unsafe {
            relocate(base.add(a), parked, b);
            relocate(base, base.add(b), a);
            relocate(parked, base, b);
        }
    } else {
        // Mirror image: park the left segment instead.
        let mut scratch = ScratchBuffer::new(a);
        let parked = SharedPtr::new(scratch.as_mut_ptr());
        // SAFETY: as above with the roles swapped; the shift
        // [a, a + b) -> [0, b) is disjoint because b < a in this branch.
        unsafe {
            relocate(base, parked, a);
            relocate(base.add(a), base, b);
            relocate(parked, base.add(b), a);
        }
    }

    Ok(b)
}

// ============================================================================
// In-Place Rotate
// ============================================================================

/// Reverse `v` with a parallel-for over its `len / 2` disjoint swap pairs.
fn parallel_reverse<T: Send>(v: &mut [T]) {
    let len = v.len();
    let half = len / 2;
    if half == 0 {
        return;
    }

    let (front, rest) = v.split_at_mut(half);
    // Skip the fixed middle element of odd-length slices.
    let back = &mut rest[len % 2..];
    front
        .par_iter_mut()
        .zip(back.par_iter_mut().rev())
        .for_each(|(x, y)| mem::swap(x, y));
}

/// Rotate `data` so the element at `mid` becomes the first, in place via
/// three reversals. Returns the new index of the element that was
/// originally first (`len - mid`).
pub fn rotate_inplace<T, A>(data: &mut A, mid: usize) -> Result<usize, SliceError>
where
    T: Send,
    A: SliceInputMut<T> + ?Sized,
{
    let v = data.as_algo_slice_mut()?;
    let len = v.len();
    Validator::midpoint(mid, len)?;

    if mid == 0 || mid == len {
        return Ok(len - mid);
    }

    let (lo, hi) = v.split_at_mut(mid);
    rayon::join(|| parallel_reverse(lo), || parallel_reverse(hi));
    parallel_reverse(v);

    Ok(len - mid)
}
