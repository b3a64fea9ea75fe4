//! Serial reductions: index-tracking extrema and counting.
//!
//! ## Purpose
//!
//! This module provides the serial counterparts of the parallel reductions.
//! Extrema return the *index* of the extreme element so that callers can
//! recover both position and value, and ties resolve to the lowest index,
//! the same answer the canonical single-threaded `min_element`/`max_element`
//! produce by scanning left to right.

// External dependencies
use core::cmp::Ordering;

/// Index of the minimum element under `compare`, lowest index on ties.
/// Returns `None` for an empty slice.
pub fn min_by_index<T, F>(v: &[T], compare: &F) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut best: Option<usize> = None;
    for (i, x) in v.iter().enumerate() {
        match best {
            None => best = Some(i),
            // Replace only on a strict win so the first extremum is kept.
            Some(b) => {
                if compare(x, &v[b]) == Ordering::Less {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Index of the maximum element under `compare`, lowest index on ties.
/// Returns `None` for an empty slice.
pub fn max_by_index<T, F>(v: &[T], compare: &F) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut best: Option<usize> = None;
    for (i, x) in v.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                if compare(x, &v[b]) == Ordering::Greater {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Number of elements equal to `value`.
pub fn count<T: PartialEq>(v: &[T], value: &T) -> usize {
    v.iter().filter(|x| *x == value).count()
}

/// Number of elements satisfying `pred`.
pub fn count_if<T, P>(v: &[T], pred: &P) -> usize
where
    P: Fn(&T) -> bool,
{
    v.iter().filter(|x| pred(x)).count()
}
