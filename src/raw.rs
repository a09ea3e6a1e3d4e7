//! Raw, pointer-addressed storage.

use std::alloc::Layout;
use std::ptr::NonNull;

use crate::alloc::{alloc_block, dealloc_block};
use crate::error::{IntVecError, Result};
use crate::growth::grow_capacity;
use crate::store::IntStore;

/// Append-only `i32` sequence over a manually allocated block, addressed
/// with pointer arithmetic.
///
/// The fast-path contract deliberately omits bounds checks:
/// [`IntStore::get`] reads `base + index * 4` without consulting `len`, so
/// an out-of-range index reads adjacent memory. `debug_assert!` guards
/// catch such violations in debug and test builds only, keeping the
/// release path free of the overhead the other variants pay.
///
/// The handle is move-only and releases its block exactly once, in `Drop`.
/// [`dispose`](RawStore::dispose) is the explicit spelling of that release.
/// Use-after-move and double-release are thereby ruled out at compile time.
#[derive(Debug)]
pub struct RawStore {
    base: NonNull<i32>,
    len: usize,
    capacity: usize,
}

// SAFETY: RawStore uniquely owns its block; nothing aliases `base`, so
// moving the handle to another thread moves sole access with it.
unsafe impl Send for RawStore {}

impl RawStore {
    fn layout(capacity: usize) -> Layout {
        #[allow(clippy::expect_used)]
        Layout::array::<i32>(capacity).expect("capacity fits in isize")
    }

    /// Creates an empty store with room for `capacity` values.
    ///
    /// `capacity` is a sizing hint, not a limit. A hint of 0 defers
    /// allocation to the first push.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let base = if capacity == 0 {
            NonNull::dangling()
        } else {
            alloc_block(Self::layout(capacity)).cast::<i32>()
        };
        Self {
            base,
            len: 0,
            capacity,
        }
    }

    /// Releases the owned block now instead of at end of scope.
    ///
    /// Consumes the handle, so no read can follow the release.
    pub fn dispose(self) {}

    fn grow(&mut self) {
        let new_capacity = grow_capacity(self.capacity, self.len + 1);
        let next = alloc_block(Self::layout(new_capacity)).cast::<i32>();
        if self.capacity > 0 {
            // SAFETY: both blocks are live and distinct, and each spans at
            // least `len` words.
            unsafe {
                next.as_ptr().copy_from_nonoverlapping(self.base.as_ptr(), self.len);
                dealloc_block(self.base.cast::<u8>(), Self::layout(self.capacity));
            }
        }
        self.base = next;
        self.capacity = new_capacity;
    }
}

impl IntStore for RawStore {
    fn push(&mut self, value: i32) {
        if self.len == self.capacity {
            self.grow();
        }
        // SAFETY: len < capacity after grow, so the write lands inside the
        // owned block.
        unsafe { self.base.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Returns the value at `index` with no release-build bounds check.
    ///
    /// Reading `index >= self.len()` is a contract violation: it returns
    /// adjacent block content or faults. Debug builds panic instead.
    fn get(&self, index: usize) -> i32 {
        debug_assert!(
            index < self.len,
            "index {index} out of bounds for length {}",
            self.len
        );
        // SAFETY: contract requires index < len <= capacity; the read then
        // stays inside the owned block.
        unsafe { self.base.as_ptr().add(index).read() }
    }

    fn try_get(&self, index: usize) -> Result<i32> {
        if index < self.len {
            Ok(self.get(index))
        } else {
            Err(IntVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Drop for RawStore {
    fn drop(&mut self) {
        if self.capacity > 0 {
            // SAFETY: base was returned by alloc_block with this layout and
            // ownership is exclusive; Drop runs at most once.
            unsafe { dealloc_block(self.base.cast::<u8>(), Self::layout(self.capacity)) };
        }
    }
}
