//! Error types for slice-algorithm operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can surface from the public
//! entry points of the workspace: input adaptation failures and precondition
//! violations that are representable in the API (mismatched buffer lengths,
//! an out-of-range rotation midpoint).
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (actual vs. expected).
//! * **Small**: Degenerate inputs (empty ranges) are canonical results, not
//!   errors, so the taxonomy stays short.
//! * **No-std**: All variants are `Copy`-friendly value types; no allocation
//!   is needed to construct or format them.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for slice-algorithm operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceError {
    /// Input storage is not contiguous in memory and cannot be viewed as a
    /// slice (e.g. a strided ndarray view).
    NonContiguousInput,

    /// Input and output ranges must have the same number of elements.
    MismatchedLengths {
        /// Number of elements in the input range.
        input: usize,
        /// Number of elements in the output range.
        output: usize,
    },

    /// Rotation midpoint must lie within `0..=len`.
    MidpointOutOfBounds {
        /// The midpoint provided.
        mid: usize,
        /// Length of the range being rotated.
        len: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SliceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonContiguousInput => {
                write!(f, "Input must be contiguous in memory")
            }
            Self::MismatchedLengths { input, output } => {
                write!(
                    f,
                    "Length mismatch: input has {input} elements, output has {output}"
                )
            }
            Self::MidpointOutOfBounds { mid, len } => {
                write!(f, "Invalid midpoint: {mid} (must be at most len {len})")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for SliceError {}
