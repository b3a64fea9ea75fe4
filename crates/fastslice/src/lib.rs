//! # fastslice: parallel algorithms over random-access slices
//!
//! Data-parallel counterparts of the canonical single-threaded slice
//! algorithms: a stable merge sort, an in-place partition, two find
//! variants, reductions, transforms, and rotations. Every operation matches
//! the semantic contract of its serial analogue, with the same results, tie-breaks,
//! and stability, while exploiting a work-stealing runtime
//! (`rayon`) through recursive divide-and-conquer and strided partitioning.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastslice::prelude::*;
//!
//! let mut data = vec![0.3_f64, 0.1, 0.9, 0.5, 0.2];
//! stable_sort_by(&mut data, |a: &f64, b: &f64| a.partial_cmp(b).unwrap())?;
//! assert_eq!(data, [0.1, 0.2, 0.3, 0.5, 0.9]);
//!
//! let mut numbers: Vec<i64> = (0..10_000).rev().collect();
//! stable_sort(&mut numbers)?;
//! assert!(is_sorted(&numbers)?);
//!
//! let split = partition(&mut numbers, |x| x % 2 == 0)?;
//! assert_eq!(split, 5_000);
//!
//! let probe = numbers[17];
//! assert_eq!(find(&numbers, &probe)?, Some(17));
//! # Result::<(), SliceError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every entry point returns `Result<_, SliceError>`. Degenerate inputs
//! (empty slices) are not errors and produce the canonical empty-case
//! result (`None`, `0`, `true`, ...). Errors only arise from input
//! adaptation (non-contiguous `ndarray` storage) and from representable
//! precondition violations (a transform output of the wrong length, a
//! rotation midpoint past the end). The `?` operator is idiomatic:
//!
//! ```rust
//! use fastslice::prelude::*;
//!
//! let data = vec![5, 3, 8, 3];
//! let lowest = min_element(&data)?;
//! assert_eq!(lowest, Some(1));
//! # Result::<(), SliceError>::Ok(())
//! ```
//!
//! ## Inputs
//!
//! Operations are generic over [`SliceInput`]/[`SliceInputMut`], so plain
//! slices, `Vec`s, and (with the default `ndarray` feature) one-dimensional
//! `ndarray` arrays are all accepted directly.
//!
//! ## Concurrency model
//!
//! Fork/join over rayon's work-stealing pool. Ranges are divided so each
//! task owns a disjoint region; the single multi-writer location in the
//! whole crate is the pruning atomic inside [`find_pruned`]. Comparators
//! and predicates are invoked from multiple worker threads and must be safe
//! to call concurrently (pure, or internally synchronized). Grain-size
//! cutoffs route small ranges to the serial kernels in `slicekit`.

// Input abstraction over slices, vectors, and ndarray arrays.
mod input;

// Shared raw-pointer plumbing for the relocating algorithms.
mod raw;

// Parallel bisection merge.
mod merge;

// Parallel stable sort.
mod sort;

// Block-strided parallel partition.
mod partition;

// Parallel search: tree find, pruned find, sortedness.
mod search;

// Parallel reductions: extrema and counting.
mod reduce;

// Parallel transform.
mod transform;

// Parallel rotations.
mod rotate;

// Publicly re-exported types
pub use input::{SliceInput, SliceInputMut};
pub use partition::partition;
pub use reduce::{count, count_if, max_element, max_element_by, min_element, min_element_by};
pub use rotate::{rotate, rotate_inplace};
pub use search::{find, find_pruned, is_sorted, is_sorted_by};
pub use slicekit::primitives::errors::SliceError;
pub use sort::{stable_sort, stable_sort_by};
pub use transform::transform;

// Standard fastslice prelude.
pub mod prelude {
    pub use crate::input::{SliceInput, SliceInputMut};
    pub use crate::partition::partition;
    pub use crate::reduce::{
        count, count_if, max_element, max_element_by, min_element, min_element_by,
    };
    pub use crate::rotate::{rotate, rotate_inplace};
    pub use crate::search::{find, find_pruned, is_sorted, is_sorted_by};
    pub use crate::sort::{stable_sort, stable_sort_by};
    pub use crate::transform::transform;
    pub use slicekit::primitives::errors::SliceError;
}
