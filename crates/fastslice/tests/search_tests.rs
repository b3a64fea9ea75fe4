//! Tests for the parallel searches.
//!
//! Both find variants must agree with the serial linear scan on present
//! and absent targets, always reporting the lowest matching index; the
//! sortedness check must agree with a windowed scan, including when the
//! only violation straddles the recursion midpoint.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fastslice::prelude::*;

const LARGE: usize = 20_000;

fn random_values(seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..LARGE).map(|_| rng.gen_range(0..9000)).collect()
}

/// Test both variants against the serial reference over a sweep of
/// present and absent targets.
#[test]
fn test_find_agrees_with_reference() {
    let v = random_values(101);

    for target in (1..=9021).step_by(20) {
        let expected = v.iter().position(|x| *x == target);
        assert_eq!(find(&v, &target).unwrap(), expected, "find({target})");
        assert_eq!(
            find_pruned(&v, &target).unwrap(),
            expected,
            "find_pruned({target})"
        );
    }
}

/// Test that planted duplicates resolve to the lowest index.
#[test]
fn test_find_takes_first_duplicate() {
    let mut v = vec![0i32; LARGE];
    for (i, slot) in v.iter_mut().enumerate() {
        *slot = i as i32;
    }
    // Plant the needle late, then earlier, then very early.
    for &plant in &[LARGE - 1, LARGE / 2, 137] {
        v[plant] = -1;
        let expected = v.iter().position(|x| *x == -1);
        assert_eq!(find(&v, &-1).unwrap(), expected);
        assert_eq!(find_pruned(&v, &-1).unwrap(), expected);
    }
}

/// Test the sub-grain serial fallbacks.
#[test]
fn test_find_small_inputs() {
    let v = vec![5, 3, 8];
    assert_eq!(find(&v, &8).unwrap(), Some(2));
    assert_eq!(find_pruned(&v, &8).unwrap(), Some(2));

    let empty: Vec<i32> = vec![];
    assert_eq!(find(&empty, &1).unwrap(), None);
    assert_eq!(find_pruned(&empty, &1).unwrap(), None);
}

/// Test sortedness on large sorted input and on violations planted at
/// awkward positions, including exactly astride the top-level midpoint.
#[test]
fn test_is_sorted_positions() {
    let sorted: Vec<i32> = (0..LARGE as i32).collect();
    assert!(is_sorted(&sorted).unwrap());

    for violation in [1, LARGE / 2, LARGE - 1] {
        let mut v = sorted.clone();
        v.swap(violation - 1, violation);
        assert!(!is_sorted(&v).unwrap(), "violation at {violation} missed");
    }
}

/// Test sortedness under a custom comparator.
#[test]
fn test_is_sorted_by_comparator() {
    let descending: Vec<i32> = (0..LARGE as i32).rev().collect();
    assert!(!is_sorted(&descending).unwrap());
    assert!(is_sorted_by(&descending, |a: &i32, b: &i32| b.cmp(a)).unwrap());
}
