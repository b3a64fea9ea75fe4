//! Tests for input validation and error formatting.

use slicekit::primitives::errors::SliceError;
use slicekit::primitives::validate::Validator;

/// Test the length-agreement check.
#[test]
fn test_same_length() {
    assert_eq!(Validator::same_length(4, 4), Ok(()));
    assert_eq!(Validator::same_length(0, 0), Ok(()));
    assert_eq!(
        Validator::same_length(4, 3),
        Err(SliceError::MismatchedLengths {
            input: 4,
            output: 3
        })
    );
}

/// Test the midpoint bounds check; `mid == len` is a valid no-op rotation.
#[test]
fn test_midpoint() {
    assert_eq!(Validator::midpoint(0, 0), Ok(()));
    assert_eq!(Validator::midpoint(5, 5), Ok(()));
    assert_eq!(
        Validator::midpoint(6, 5),
        Err(SliceError::MidpointOutOfBounds { mid: 6, len: 5 })
    );
}

/// Test that error messages carry the offending values.
#[test]
fn test_error_display() {
    let msg = SliceError::MismatchedLengths {
        input: 4,
        output: 3,
    }
    .to_string();
    assert!(msg.contains('4') && msg.contains('3'));

    let msg = SliceError::MidpointOutOfBounds { mid: 6, len: 5 }.to_string();
    assert!(msg.contains('6') && msg.contains('5'));
}
