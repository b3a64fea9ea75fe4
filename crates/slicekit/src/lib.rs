//! # slicekit: serial slice-algorithm kernels
//!
//! Serial kernels and shared primitives for parallel slice algorithms. This
//! crate is the single-threaded half of the `fastslice` workspace: it holds
//! the canonical serial algorithms that the parallel crate falls back to
//! below its grain-size cutoffs, together with the error type, input
//! validation, and the raw scratch-buffer primitive the parallel sort and
//! rotate build on.
//!
//! ## Quick Start
//!
//! ```rust
//! use slicekit::prelude::*;
//!
//! let mut data = vec![4, 1, 3, 2];
//! stable_sort_by(&mut data, &|a: &i32, b: &i32| a.cmp(b));
//! assert_eq!(data, [1, 2, 3, 4]);
//!
//! let split = partition_in_place(&mut data, &|x| x % 2 == 0);
//! assert_eq!(split, 2);
//! assert!(data[..split].iter().all(|x| x % 2 == 0));
//! ```
//!
//! ## Layout
//!
//! The crate is layered, leaves first, and each layer only depends on the
//! layers below it:
//!
//! ```text
//! Layer 2: Kernels     (canonical serial algorithms)
//!   ↓
//! Layer 1: Primitives  (errors, validation, raw scratch storage)
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency (an allocator is still required
//! for the scratch buffer and the stable sort):
//!
//! ```toml
//! [dependencies]
//! slicekit = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, validation, and raw storage.
pub mod primitives;

// Layer 2: Kernels - canonical serial algorithms.
pub mod kernels;

// Standard slicekit prelude.
pub mod prelude {
    pub use crate::kernels::merge::merge_move;
    pub use crate::kernels::partition::partition_in_place;
    pub use crate::kernels::reduce::{count, count_if, max_by_index, min_by_index};
    pub use crate::kernels::search::{find, is_sorted_by};
    pub use crate::kernels::sort::stable_sort_by;
    pub use crate::primitives::errors::SliceError;
    pub use crate::primitives::scratch::ScratchBuffer;
    pub use crate::primitives::validate::Validator;
}
