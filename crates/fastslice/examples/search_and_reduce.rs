//! fastslice Search and Reduction Examples
//!
//! This example demonstrates:
//! - Tree find vs. pruned find on near and far matches
//! - Parallel extrema and counting
//! - Rotations

use std::time::Instant;

use fastslice::prelude::*;

fn main() -> Result<(), SliceError> {
    let values: Vec<i64> = (0..2_000_000).collect();

    // Pruned find abandons dominated subtrees, so a match near the front
    // costs far less than the full sweep.
    for needle in [5_000i64, 1_999_999] {
        let start = Instant::now();
        let tree = find(&values, &needle)?;
        let tree_time = start.elapsed();

        let start = Instant::now();
        let pruned = find_pruned(&values, &needle)?;
        let pruned_time = start.elapsed();

        assert_eq!(tree, pruned);
        println!(
            "needle {needle:>9}: tree {tree_time:>10?}  pruned {pruned_time:>10?}  -> {tree:?}"
        );
    }

    // Reductions agree with their serial counterparts bit-exactly.
    println!("min at {:?}", min_element(&values)?);
    println!("max at {:?}", max_element(&values)?);
    println!("multiples of 3: {}", count_if(&values, |x| x % 3 == 0)?);

    // Rotate the front third to the back, then undo it in place.
    let mut ring = values.clone();
    let mid = ring.len() / 3;
    let pivot = rotate(&mut ring, mid)?;
    rotate_inplace(&mut ring, pivot)?;
    assert_eq!(ring, values);
    println!("rotate round-trip restored the original order");

    Ok(())
}
