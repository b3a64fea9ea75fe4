//! Raw scratch-buffer storage for out-of-place algorithms.
//!
//! ## Purpose
//!
//! This module provides [`ScratchBuffer`], a heap allocation of `len`
//! uninitialized element slots used as the shadow buffer by the parallel
//! stable sort and as the segment buffer by the buffered rotate. The buffer
//! is scoped to the call that allocates it; dropping it releases the memory
//! on every exit path, including unwinds out of comparator panics.
//!
//! ## Design notes
//!
//! * **Raw storage**: Slots are `MaybeUninit<T>` and are only ever *moved
//!   into* before being read. The buffer never runs element destructors.
//! * **Ownership discipline**: At every point, each live element's bits are
//!   owned by exactly one droppable location (the caller's slice). A panic
//!   mid-relocation can therefore leak elements parked in the buffer, but it
//!   can never double-drop one.
//!
//! ## Invariants
//!
//! * `as_mut_ptr()` is valid for `len()` reads and writes of `T`.
//! * The allocation is freed exactly once, by `Drop`.
//!
//! ## Non-goals
//!
//! * Growth, reuse across calls, or pooling; each call allocates its own
//!   buffer and releases it on exit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::mem::MaybeUninit;

// ============================================================================
// ScratchBuffer
// ============================================================================

/// A scoped allocation of `len` uninitialized `T` slots.
///
/// Dropping the buffer frees the allocation without dropping any `T`; any
/// element bits still parked here when the buffer is dropped are leaked, not
/// destroyed. Callers move elements in with raw writes and move them back
/// out before returning.
pub struct ScratchBuffer<T> {
    slots: Vec<MaybeUninit<T>>,
}

impl<T> ScratchBuffer<T> {
    /// Allocate a buffer of `len` uninitialized slots.
    pub fn new(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        // SAFETY: `MaybeUninit<T>` is valid uninitialized, and the capacity
        // for `len` slots was reserved above.
        unsafe { slots.set_len(len) };
        Self { slots }
    }

    /// Number of slots in the buffer.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the buffer has zero slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw base pointer to the slots, valid for `len()` reads and writes.
    ///
    /// Reading a slot is only defined after an element has been moved into
    /// it; writing a slot that already holds an element leaks that element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }
}
