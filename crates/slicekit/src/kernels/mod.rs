//! Layer 2: Kernels
//!
//! # Purpose
//!
//! This layer provides the canonical serial algorithms. The parallel crate
//! dispatches to these kernels whenever a range falls under the relevant
//! grain-size cutoff, and uses them as the leaves of its recursive
//! algorithms (merge leaves, find leaves, the partition middle cleanup).
//!
//! Every kernel matches the semantics of its single-threaded `std`
//! counterpart exactly, including tie-breaking: merges prefer the left
//! stream, extrema prefer the lowest index.

/// Serial relocating merge.
pub mod merge;

/// Serial in-place partition.
pub mod partition;

/// Serial reductions (extrema, counting).
pub mod reduce;

/// Serial search (find, sortedness).
pub mod search;

/// Serial stable sort.
pub mod sort;
