//! Raw allocation plumbing for the natively-backed stores.
//!
//! `BufferStore` in native mode and `RawStore` both own memory obtained
//! directly from the global allocator rather than through `Vec`. All such
//! allocations go through this module so that an outstanding-bytes counter
//! can be maintained; tests use it to assert that disposal returns the
//! process to its pre-test baseline.

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

static OUTSTANDING_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Total bytes currently allocated through this module and not yet released.
#[must_use]
pub fn outstanding_bytes() -> usize {
    OUTSTANDING_BYTES.load(Ordering::SeqCst)
}

/// Allocates `layout.size()` zeroed bytes from the global allocator.
///
/// Blocks come back zeroed so callers may view them as initialized byte
/// slices before every word has been written.
///
/// Allocation failure is fatal: the operation cannot proceed without
/// memory, so this aborts via `handle_alloc_error` rather than returning.
///
/// # Panics
///
/// Panics if `layout` has zero size; callers allocate lazily instead of
/// requesting empty blocks.
pub(crate) fn alloc_block(layout: Layout) -> NonNull<u8> {
    assert!(layout.size() > 0, "zero-size blocks are never allocated");
    // SAFETY: layout is non-zero-sized, checked above.
    let ptr = unsafe { alloc_zeroed(layout) };
    let Some(ptr) = NonNull::new(ptr) else {
        handle_alloc_error(layout);
    };
    OUTSTANDING_BYTES.fetch_add(layout.size(), Ordering::SeqCst);
    ptr
}

/// Returns a block previously obtained from [`alloc_block`] with the same
/// layout.
///
/// # Safety
///
/// `ptr` must have been returned by [`alloc_block`] with exactly this
/// `layout`, and must not be used afterwards.
pub(crate) unsafe fn dealloc_block(ptr: NonNull<u8>, layout: Layout) {
    OUTSTANDING_BYTES.fetch_sub(layout.size(), Ordering::SeqCst);
    // SAFETY: forwarded contract, see function-level safety requirements.
    unsafe { dealloc(ptr.as_ptr(), layout) };
}
