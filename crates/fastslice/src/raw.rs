//! Raw-pointer plumbing shared by the relocating algorithms.
//!
//! ## Purpose
//!
//! The sort, partition, and buffered rotate hand disjoint regions of a
//! single allocation to concurrent tasks. Safe splitting (`split_at_mut`)
//! cannot express two of those shapes, interleaved stride classes and
//! slice-to-scratch relocation, so this module provides the one wrapper
//! that lets a raw base pointer cross task boundaries, plus the parallel
//! bulk relocation built on it.
//!
//! ## Invariants
//!
//! * Every task that receives a [`SharedPtr`] touches an index set disjoint
//!   from every concurrently running task's. That disjointness is the whole
//!   safety argument; each call site states its own partitioning.

// External dependencies
use core::ptr;
use rayon::prelude::*;

// Chunk width for parallel bulk relocation.
const RELOCATE_CHUNK: usize = 4096;

// ============================================================================
// SharedPtr
// ============================================================================

/// A raw base pointer that may be copied into concurrent tasks.
///
/// The wrapper carries no provenance of its own: whoever created it promises
/// that concurrent users access disjoint index sets.
pub(crate) struct SharedPtr<T>(*mut T);

// Manual impls: the pointer is copyable regardless of `T`, and a derive
// would demand `T: Copy`.
impl<T> Clone for SharedPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SharedPtr<T> {}

// SAFETY: the pointer is only dereferenced under the disjoint-index-set
// contract above, so sending or sharing the wrapper across threads adds no
// aliasing beyond what each call site already justifies.
unsafe impl<T: Send> Send for SharedPtr<T> {}
unsafe impl<T: Send> Sync for SharedPtr<T> {}

impl<T> SharedPtr<T> {
    pub(crate) fn new(ptr: *mut T) -> Self {
        Self(ptr)
    }

    pub(crate) fn get(self) -> *mut T {
        self.0
    }

    /// Pointer advanced by `offset` elements.
    ///
    /// # Safety
    ///
    /// `offset` must stay within the allocation the base pointer came from.
    pub(crate) unsafe fn add(self, offset: usize) -> Self {
        // SAFETY: forwarded to the caller.
        Self(unsafe { self.0.add(offset) })
    }
}

// ============================================================================
// Parallel Bulk Relocation
// ============================================================================

/// Relocate `len` elements from `src` to `dst` with a chunked parallel-for.
///
/// # Safety
///
/// * `src` and `dst` must be valid for `len` element reads and writes
///   respectively, and the two regions must not overlap.
/// * Source slots must hold initialized elements; afterwards only `dst`
///   owns them.
pub(crate) unsafe fn relocate<T: Send>(src: SharedPtr<T>, dst: SharedPtr<T>, len: usize) {
    if len <= RELOCATE_CHUNK {
        // SAFETY: non-overlap and validity are the caller's contract.
        unsafe { ptr::copy_nonoverlapping(src.get(), dst.get(), len) };
        return;
    }

    let chunks = len.div_ceil(RELOCATE_CHUNK);
    (0..chunks).into_par_iter().for_each(|c| {
        let start = c * RELOCATE_CHUNK;
        let n = RELOCATE_CHUNK.min(len - start);
        // SAFETY: chunk c owns exactly [start, start + n) in both regions,
        // and the regions themselves do not overlap.
        unsafe { ptr::copy_nonoverlapping(src.get().add(start), dst.get().add(start), n) };
    });
}
