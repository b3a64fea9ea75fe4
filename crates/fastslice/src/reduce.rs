//! Parallel reductions: extrema and counting.
//!
//! ## Purpose
//!
//! Flat parallel-for reductions over a read-only slice. Extrema reduce
//! `(index, element)` pairs with a combine that only replaces the running
//! best on a strict ordering win; because the combine is associative and
//! rayon's `reduce` keeps operands in sequence order, ties resolve to the
//! lowest index exactly as the left-to-right serial scan does. Counting
//! reduces a filtered parallel iterator.
//!
//! Sub-grain inputs dispatch straight to the serial kernels.

// External dependencies
use core::cmp::Ordering;
use rayon::prelude::*;

// Export dependencies from slicekit
use slicekit::kernels::reduce as serial_reduce;
use slicekit::primitives::errors::SliceError;

// Internal dependencies
use crate::input::SliceInput;

// Below this length the reductions run on the serial kernels.
const REDUCE_SERIAL_CUTOFF: usize = 2048;

// ============================================================================
// Extrema
// ============================================================================

/// Index of the minimum element under `compare`, lowest index on ties.
/// Returns `None` for an empty slice.
pub fn min_element_by<T, A, F>(data: &A, compare: F) -> Result<Option<usize>, SliceError>
where
    T: Sync,
    A: SliceInput<T> + ?Sized,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let v = data.as_algo_slice()?;
    if v.len() < REDUCE_SERIAL_CUTOFF {
        return Ok(serial_reduce::min_by_index(v, &compare));
    }

    Ok(v.par_iter()
        .enumerate()
        .reduce_with(|best, cand| {
            // Strict win only, so the earlier pair survives ties.
            if compare(cand.1, best.1) == Ordering::Less {
                cand
            } else {
                best
            }
        })
        .map(|(i, _)| i))
}

/// Index of the minimum element by the natural order of `T`.
pub fn min_element<T, A>(data: &A) -> Result<Option<usize>, SliceError>
where
    T: Ord + Sync,
    A: SliceInput<T> + ?Sized,
{
    min_element_by(data, T::cmp)
}

/// Index of the maximum element under `compare`, lowest index on ties.
/// Returns `None` for an empty slice.
pub fn max_element_by<T, A, F>(data: &A, compare: F) -> Result<Option<usize>, SliceError>
where
    T: Sync,
    A: SliceInput<T> + ?Sized,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let v = data.as_algo_slice()?;
    if v.len() < REDUCE_SERIAL_CUTOFF {
        return Ok(serial_reduce::max_by_index(v, &compare));
    }

    Ok(v.par_iter()
        .enumerate()
        .reduce_with(|best, cand| {
            if compare(cand.1, best.1) == Ordering::Greater {
                cand
            } else {
                best
            }
        })
        .map(|(i, _)| i))
}

/// Index of the maximum element by the natural order of `T`.
pub fn max_element<T, A>(data: &A) -> Result<Option<usize>, SliceError>
where
    T: Ord + Sync,
    A: SliceInput<T> + ?Sized,
{
    max_element_by(data, T::cmp)
}

// ============================================================================
// Counting
// ============================================================================

/// Number of elements equal to `value`.
pub fn count<T, A>(data: &A, value: &T) -> Result<usize, SliceError>
where
    T: PartialEq + Sync,
    A: SliceInput<T> + ?Sized,
{
    let v = data.as_algo_slice()?;
    if v.len() < REDUCE_SERIAL_CUTOFF {
        return Ok(serial_reduce::count(v, value));
    }
    Ok(v.par_iter().filter(|x| *x == value).count())
}

/// Number of elements satisfying `pred`.
pub fn count_if<T, A, P>(data: &A, pred: P) -> Result<usize, SliceError>
where
    T: Sync,
    A: SliceInput<T> + ?Sized,
    P: Fn(&T) -> bool + Sync,
{
    let v = data.as_algo_slice()?;
    if v.len() < REDUCE_SERIAL_CUTOFF {
        return Ok(serial_reduce::count_if(v, &pred));
    }
    Ok(v.par_iter().filter(|x| pred(x)).count())
}
