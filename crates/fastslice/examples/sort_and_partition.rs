//! fastslice Sort and Partition Examples
//!
//! This example demonstrates the two heavyweight algorithms:
//! - Parallel stable sort on a large random vector
//! - Stability on records with duplicated keys
//! - Block-strided parallel partition

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use fastslice::prelude::*;

fn main() -> Result<(), SliceError> {
    example_1_sort()?;
    example_2_stable_records()?;
    example_3_partition()?;
    Ok(())
}

/// Example 1: Parallel stable sort on one million doubles.
fn example_1_sort() -> Result<(), SliceError> {
    println!("Example 1: Parallel stable sort");
    println!("{}", "-".repeat(60));

    let n = 1_000_000;
    let mut rng = StdRng::seed_from_u64(1);
    let mut values: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();

    let start = Instant::now();
    stable_sort_by(&mut values, |a: &f64, b: &f64| a.partial_cmp(b).unwrap())?;
    println!("Sorted {} doubles in {:?}", n, start.elapsed());
    println!("Sorted: {}\n", is_sorted_by(&values, |a: &f64, b: &f64| a.partial_cmp(b).unwrap())?);
    Ok(())
}

/// Example 2: Stability: equal keys keep their arrival order.
fn example_2_stable_records() -> Result<(), SliceError> {
    println!("Example 2: Stability on duplicated keys");
    println!("{}", "-".repeat(60));

    let mut rng = StdRng::seed_from_u64(2);
    let mut records: Vec<(u8, u32)> = (0..200_000u32)
        .map(|id| (rng.gen_range(0..=10u8), id))
        .collect();

    stable_sort_by(&mut records, |a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0))?;

    let stable = records
        .windows(2)
        .all(|w| w[0].0 < w[1].0 || w[0].1 < w[1].1);
    println!("Records grouped by key, ids still increasing: {}\n", stable);
    Ok(())
}

/// Example 3: Parallel partition of evens before odds.
fn example_3_partition() -> Result<(), SliceError> {
    println!("Example 3: Block-strided partition");
    println!("{}", "-".repeat(60));

    let mut rng = StdRng::seed_from_u64(3);
    let mut values: Vec<i64> = (0..1_000_000).map(|_| rng.gen_range(0..1_000_000)).collect();

    let start = Instant::now();
    let split = partition(&mut values, |x| x % 2 == 0)?;
    println!("Partitioned 1M ints in {:?}", start.elapsed());
    println!("{} evens precede {} odds\n", split, values.len() - split);
    Ok(())
}
