//! Parallel search: tree find, pruned find, and sortedness.
//!
//! ## Purpose
//!
//! Three divide-and-conquer searches over a shared read-only slice. The
//! tree [`find`] forks both halves and prefers the left result, which
//! yields the lowest matching index. [`find_pruned`] adds speculative
//! early termination: a shared atomic carries the best (lowest) match found
//! so far, and any task whose whole range lies at or beyond it returns
//! without doing work. [`is_sorted`] is the same tree shape reducing with
//! logical AND.
//!
//! ## Key concepts
//!
//! * **Monotone pruning**: The atomic starts at `len` ("no match yet") and
//!   only ever decreases, via `fetch_min`. Relaxed ordering suffices: no
//!   other data depends on the value, correctness needs only the monotone
//!   decrease, and the final load happens after the implicit join barrier.
//! * **Deterministic result**: Scheduling decides how much dominated work
//!   runs, never the answer; the reported index is always the smallest
//!   match.

// External dependencies
use core::cmp::Ordering;
use core::sync::atomic::{AtomicUsize, Ordering::Relaxed};

// Export dependencies from slicekit
use slicekit::kernels::search as serial_search;
use slicekit::primitives::errors::SliceError;

// Internal dependencies
use crate::input::SliceInput;

// Grain size for the binary-recursion searches (tree find, is_sorted).
const TREE_GRAIN: usize = 2000;

// Grain size for the pruned find.
const PRUNED_GRAIN: usize = 2400;

// ============================================================================
// Tree Find
// ============================================================================

fn tree_find<T: PartialEq + Sync>(v: &[T], value: &T) -> Option<usize> {
    if v.len() < TREE_GRAIN {
        return serial_search::find(v, value);
    }

    let mid = v.len() / 2;
    let (lo, hi) = v.split_at(mid);
    let (left, right) = rayon::join(|| tree_find(lo, value), || tree_find(hi, value));

    // Preferring the left branch on double hits keeps the index lowest.
    left.or_else(|| right.map(|i| mid + i))
}

/// Index of the first element equal to `value`, searched by forking both
/// halves and preferring the left result. Returns `None` if absent.
pub fn find<T, A>(data: &A, value: &T) -> Result<Option<usize>, SliceError>
where
    T: PartialEq + Sync,
    A: SliceInput<T> + ?Sized,
{
    Ok(tree_find(data.as_algo_slice()?, value))
}

// ============================================================================
// Pruned Find
// ============================================================================

fn pruned_find<T: PartialEq + Sync>(
    v: &[T],
    start: usize,
    end: usize,
    value: &T,
    best: &AtomicUsize,
) {
    // A match strictly left of this whole range dominates it.
    if start >= best.load(Relaxed) {
        return;
    }

    if end - start < PRUNED_GRAIN {
        if let Some(pos) = serial_search::find(&v[start..end], value) {
            best.fetch_min(start + pos, Relaxed);
        }
        return;
    }

    let mid = start + (end - start) / 2;
    rayon::join(
        || pruned_find(v, start, mid, value, best),
        || pruned_find(v, mid, end, value, best),
    );
}

/// Index of the first element equal to `value`, with speculative early
/// termination: tasks whose range lies beyond the best match found so far
/// are pruned. Returns `None` if absent.
///
/// The result is identical to [`find`]; only the amount of work done on
/// dominated subtrees depends on scheduling.
pub fn find_pruned<T, A>(data: &A, value: &T) -> Result<Option<usize>, SliceError>
where
    T: PartialEq + Sync,
    A: SliceInput<T> + ?Sized,
{
    let v = data.as_algo_slice()?;
    let len = v.len();

    if len <= 2 * PRUNED_GRAIN {
        return Ok(serial_search::find(v, value));
    }

    let best = AtomicUsize::new(len);
    pruned_find(v, 0, len, value, &best);

    let idx = best.load(Relaxed);
    Ok((idx < len).then_some(idx))
}

// ============================================================================
// Sortedness
// ============================================================================

fn tree_is_sorted<T, F>(v: &[T], compare: &F) -> bool
where
    T: Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let len = v.len();
    if len < 2 {
        return true;
    }
    if len < TREE_GRAIN {
        return serial_search::is_sorted_by(v, compare);
    }

    let mid = len / 2;
    // The pair straddling the split is checked by neither half.
    if compare(&v[mid], &v[mid - 1]) == Ordering::Less {
        return false;
    }

    let (lo, hi) = v.split_at(mid);
    let (left, right) = rayon::join(
        || tree_is_sorted(lo, compare),
        || tree_is_sorted(hi, compare),
    );
    left && right
}

/// Whether `data` is sorted under `compare`, checked by forking both
/// halves. Empty and single-element slices are sorted.
pub fn is_sorted_by<T, A, F>(data: &A, compare: F) -> Result<bool, SliceError>
where
    T: Sync,
    A: SliceInput<T> + ?Sized,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    Ok(tree_is_sorted(data.as_algo_slice()?, &compare))
}

/// Whether `data` is sorted by the natural order of `T`.
pub fn is_sorted<T, A>(data: &A) -> Result<bool, SliceError>
where
    T: Ord + Sync,
    A: SliceInput<T> + ?Sized,
{
    is_sorted_by(data, T::cmp)
}
