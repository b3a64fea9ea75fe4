//! Input abstractions for slice algorithms.
//!
//! This module provides a unified abstraction over the containers the
//! algorithms accept, allowing every entry point to process multiple data
//! formats (slices, vectors, ndarray) through a single interface. Borrowed
//! views must be contiguous: an algorithm operates on exactly one `&[T]` or
//! `&mut [T]`, and storage that cannot produce one (e.g. a strided ndarray
//! view) is rejected with [`SliceError::NonContiguousInput`].

// Feature-gated imports
#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, DataMut, Ix1};

// Export dependencies from slicekit
use slicekit::primitives::errors::SliceError;

// ============================================================================
// Input Traits
// ============================================================================

/// Containers that can be read as a contiguous slice.
pub trait SliceInput<T> {
    /// Borrow the contents as a contiguous slice.
    fn as_algo_slice(&self) -> Result<&[T], SliceError>;
}

/// Containers that can be mutated as a contiguous slice.
pub trait SliceInputMut<T>: SliceInput<T> {
    /// Borrow the contents as a contiguous mutable slice.
    fn as_algo_slice_mut(&mut self) -> Result<&mut [T], SliceError>;
}

// ============================================================================
// Implementations
// ============================================================================

impl<T> SliceInput<T> for [T] {
    fn as_algo_slice(&self) -> Result<&[T], SliceError> {
        Ok(self)
    }
}

impl<T> SliceInputMut<T> for [T] {
    fn as_algo_slice_mut(&mut self) -> Result<&mut [T], SliceError> {
        Ok(self)
    }
}

impl<T> SliceInput<T> for Vec<T> {
    fn as_algo_slice(&self) -> Result<&[T], SliceError> {
        Ok(self.as_slice())
    }
}

impl<T> SliceInputMut<T> for Vec<T> {
    fn as_algo_slice_mut(&mut self) -> Result<&mut [T], SliceError> {
        Ok(self.as_mut_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T, S> SliceInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_algo_slice(&self) -> Result<&[T], SliceError> {
        self.as_slice().ok_or(SliceError::NonContiguousInput)
    }
}

#[cfg(feature = "ndarray")]
impl<T, S> SliceInputMut<T> for ArrayBase<S, Ix1>
where
    S: DataMut<Elem = T>,
{
    fn as_algo_slice_mut(&mut self) -> Result<&mut [T], SliceError> {
        self.as_slice_mut().ok_or(SliceError::NonContiguousInput)
    }
}
