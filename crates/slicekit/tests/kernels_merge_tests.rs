//! Tests for the serial relocating merge.
//!
//! These tests verify the two-pointer merge used as the leaf of the
//! parallel bisection merge:
//! - Interleaved and disjoint inputs
//! - Empty inputs on either side
//! - Stability (left stream wins ties)

use slicekit::kernels::merge::merge_move;
use slicekit::primitives::scratch::ScratchBuffer;

/// Merge two sorted vectors through the raw kernel and read the output back.
fn merge_vecs<T: Copy>(
    mut a: Vec<T>,
    mut b: Vec<T>,
    compare: impl Fn(&T, &T) -> std::cmp::Ordering,
) -> Vec<T> {
    let mut out = ScratchBuffer::new(a.len() + b.len());
    // SAFETY: sources and destination are distinct allocations of the
    // advertised lengths; elements are Copy, so the relocated sources can
    // still be dropped normally.
    unsafe {
        merge_move(
            a.as_mut_ptr(),
            a.len(),
            b.as_mut_ptr(),
            b.len(),
            out.as_mut_ptr(),
            &compare,
        );
        (0..a.len() + b.len())
            .map(|i| out.as_mut_ptr().add(i).read())
            .collect()
    }
}

/// Test merging interleaved runs.
#[test]
fn test_merge_interleaved() {
    let merged = merge_vecs(vec![1, 3, 5, 7], vec![2, 4, 6, 8], i32::cmp);
    assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

/// Test merging when one run is entirely smaller.
#[test]
fn test_merge_disjoint_runs() {
    let merged = merge_vecs(vec![10, 11, 12], vec![1, 2, 3], i32::cmp);
    assert_eq!(merged, vec![1, 2, 3, 10, 11, 12]);
}

/// Test that an empty side degenerates to a bulk move.
#[test]
fn test_merge_empty_sides() {
    let none: Vec<i32> = vec![];
    assert_eq!(merge_vecs(none.clone(), vec![1, 2], i32::cmp), vec![1, 2]);
    assert_eq!(merge_vecs(vec![1, 2], none.clone(), i32::cmp), vec![1, 2]);
    assert_eq!(merge_vecs(none.clone(), none, i32::cmp), vec![]);
}

/// Test that equal keys are taken from the left stream first.
///
/// Records are (key, origin) pairs compared by key only; after the merge,
/// every run of equal keys must list all left-origin records before any
/// right-origin record.
#[test]
fn test_merge_stability() {
    let left: Vec<(u8, u8)> = vec![(1, 0), (2, 0), (2, 0), (5, 0)];
    let right: Vec<(u8, u8)> = vec![(1, 1), (2, 1), (5, 1), (6, 1)];
    let merged = merge_vecs(left, right, |a, b| a.0.cmp(&b.0));

    assert_eq!(
        merged,
        vec![
            (1, 0),
            (1, 1),
            (2, 0),
            (2, 0),
            (2, 1),
            (5, 0),
            (5, 1),
            (6, 1)
        ]
    );
}
