//! Serial relocating merge of two sorted ranges.
//!
//! ## Purpose
//!
//! This module implements the two-pointer merge used as the leaf of the
//! parallel bisection merge. Elements are *relocated*: each source slot is
//! read exactly once and written exactly once into the output, so the merge
//! works between a primary slice and a raw scratch buffer in either
//! direction.
//!
//! ## Key concepts
//!
//! * **Stability**: An element is taken from the right stream only when it
//!   compares strictly less than the head of the left stream; on ties the
//!   left stream wins, which is what makes the enclosing sort stable.
//!
//! ## Invariants
//!
//! * Both inputs are sorted under `compare`.
//! * The output region does not overlap either input region.

// External dependencies
use core::cmp::Ordering;
use core::ptr;

/// Merge the sorted ranges `[a, a + a_len)` and `[b, b + b_len)` into the
/// range beginning at `out`, relocating every element.
///
/// # Safety
///
/// * `a`, `b`, and `out` must be valid for `a_len`, `b_len`, and
///   `a_len + b_len` element accesses respectively.
/// * The output region must not overlap either input region.
/// * Every input slot must hold an initialized element; after the call the
///   inputs are logically uninitialized and only `out` owns the elements.
pub unsafe fn merge_move<T, F>(
    a: *mut T,
    a_len: usize,
    b: *mut T,
    b_len: usize,
    out: *mut T,
    compare: &F,
) where
    F: Fn(&T, &T) -> Ordering,
{
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    // SAFETY: i < a_len and j < b_len are maintained by the loop condition;
    // k grows by one per relocation and never exceeds a_len + b_len.
    unsafe {
        while i < a_len && j < b_len {
            // Take the right element only on a strict ordering win.
            if compare(&*b.add(j), &*a.add(i)) == Ordering::Less {
                ptr::copy_nonoverlapping(b.add(j), out.add(k), 1);
                j += 1;
            } else {
                ptr::copy_nonoverlapping(a.add(i), out.add(k), 1);
                i += 1;
            }
            k += 1;
        }
        ptr::copy_nonoverlapping(a.add(i), out.add(k), a_len - i);
        ptr::copy_nonoverlapping(b.add(j), out.add(k + (a_len - i)), b_len - j);
    }
}
