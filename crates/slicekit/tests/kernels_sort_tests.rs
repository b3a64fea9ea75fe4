//! Tests for the serial stable sort wrapper.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use slicekit::kernels::sort::stable_sort_by;

/// Test agreement with the standard sort on random data.
#[test]
fn test_sort_matches_reference() {
    let mut rng = StdRng::seed_from_u64(3);
    let original: Vec<i64> = (0..2000).map(|_| rng.gen_range(-500..500)).collect();

    let mut sorted = original.clone();
    stable_sort_by(&mut sorted, &i64::cmp);

    let mut reference = original;
    reference.sort();
    assert_eq!(sorted, reference);
}

/// Test stability: records with equal keys keep their input order.
#[test]
fn test_sort_stability() {
    let mut records: Vec<(u8, u32)> = (0..500).map(|id| ((id % 7) as u8, id)).collect();
    stable_sort_by(&mut records, &|a, b| a.0.cmp(&b.0));

    for pair in records.windows(2) {
        assert!(pair[0].0 <= pair[1].0);
        if pair[0].0 == pair[1].0 {
            assert!(pair[0].1 < pair[1].1, "equal keys must keep input order");
        }
    }
}
