//! Parallel transform into a disjoint output range.

// External dependencies
use rayon::prelude::*;

// Export dependencies from slicekit
use slicekit::primitives::errors::SliceError;
use slicekit::primitives::validate::Validator;

// Internal dependencies
use crate::input::{SliceInput, SliceInputMut};

/// Apply `f` to every input element in parallel, writing `f(&input[i])` to
/// `out[i]`. The output must have the same length as the input; the borrow
/// rules already guarantee the two ranges are disjoint.
///
/// # Example
///
/// ```rust
/// use fastslice::prelude::*;
///
/// let input = vec![1.0_f64, 4.0, 9.0];
/// let mut out = vec![0.0; 3];
/// transform(&input, &mut out, |x| x.sqrt())?;
/// assert_eq!(out, [1.0, 2.0, 3.0]);
/// # Result::<(), SliceError>::Ok(())
/// ```
pub fn transform<T, U, I, O, F>(input: &I, out: &mut O, f: F) -> Result<(), SliceError>
where
    T: Sync,
    U: Send,
    I: SliceInput<T> + ?Sized,
    O: SliceInputMut<U> + ?Sized,
    F: Fn(&T) -> U + Sync,
{
    let src = input.as_algo_slice()?;
    let dst = out.as_algo_slice_mut()?;
    Validator::same_length(src.len(), dst.len())?;

    src.par_iter()
        .zip(dst.par_iter_mut())
        .for_each(|(x, slot)| *slot = f(x));
    Ok(())
}
