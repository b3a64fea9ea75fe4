//! Input validation for slice-algorithm entry points.
//!
//! ## Purpose
//!
//! This module provides the fail-fast precondition checks shared by the
//! public entry points: output-length agreement for transforms and merge
//! targets, and midpoint bounds for rotations.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Cheap**: Every check is O(1); per-element conditions (aliasing,
//!   comparator sanity) are preconditions of the algorithms, not checks.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::SliceError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for slice-algorithm inputs.
///
/// Provides static methods returning `Result<(), SliceError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that an input/output range pair has matching lengths.
    pub fn same_length(input: usize, output: usize) -> Result<(), SliceError> {
        if input != output {
            return Err(SliceError::MismatchedLengths { input, output });
        }
        Ok(())
    }

    /// Validate a rotation midpoint against the range length.
    pub fn midpoint(mid: usize, len: usize) -> Result<(), SliceError> {
        if mid > len {
            return Err(SliceError::MidpointOutOfBounds { mid, len });
        }
        Ok(())
    }
}
