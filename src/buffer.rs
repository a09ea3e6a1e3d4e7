//! Byte-buffer storage with selectable residency.

use std::alloc::Layout;
use std::ptr::NonNull;
use std::slice;

use crate::alloc::{alloc_block, dealloc_block};
use crate::error::{IntVecError, Result};
use crate::growth::grow_capacity;
use crate::store::IntStore;

/// Bytes per stored word.
const WORD: usize = std::mem::size_of::<i32>();

/// Where a [`BufferStore`]'s bytes live.
///
/// The two modes have identical semantics; this residency choice is the
/// variable under study. `Heap` goes through `Vec<u8>`, `Native` through a
/// direct global-allocator block, mirroring the heap/direct split of byte
/// buffers in managed runtimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferMode {
    /// `Vec<u8>`-resident bytes.
    Heap,
    /// Bytes in a block obtained straight from the global allocator.
    Native,
}

/// A natively allocated byte block with RAII release.
#[derive(Debug)]
struct NativeBuf {
    ptr: NonNull<u8>,
    size: usize,
}

impl NativeBuf {
    fn layout(size: usize) -> Layout {
        // Word alignment so decoded reads are always aligned.
        Layout::from_size_align(size, WORD).expect("buffer layout fits in isize")
    }

    fn allocate(size: usize) -> Self {
        if size == 0 {
            return Self {
                ptr: NonNull::dangling(),
                size: 0,
            };
        }
        Self {
            ptr: alloc_block(Self::layout(size)),
            size,
        }
    }

    fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr covers exactly `size` initialized-or-written bytes
        // and outlives the borrow; size 0 pairs with a dangling ptr, which
        // from_raw_parts permits.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as for as_slice, plus exclusive access via &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl Drop for NativeBuf {
    fn drop(&mut self) {
        if self.size > 0 {
            // SAFETY: ptr was returned by alloc_block with this layout and
            // is released exactly once, here.
            unsafe { dealloc_block(self.ptr, Self::layout(self.size)) };
        }
    }
}

#[derive(Debug)]
enum ByteBuf {
    Heap(Vec<u8>),
    Native(NativeBuf),
}

impl ByteBuf {
    fn allocate(size: usize, mode: BufferMode) -> Self {
        match mode {
            BufferMode::Heap => Self::Heap(vec![0u8; size]),
            BufferMode::Native => Self::Native(NativeBuf::allocate(size)),
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Heap(v) => v.len(),
            Self::Native(b) => b.size,
        }
    }

    fn bytes(&self) -> &[u8] {
        match self {
            Self::Heap(v) => v,
            Self::Native(b) => b.as_slice(),
        }
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Heap(v) => v,
            Self::Native(b) => b.as_mut_slice(),
        }
    }

    fn mode(&self) -> BufferMode {
        match self {
            Self::Heap(_) => BufferMode::Heap,
            Self::Native(_) => BufferMode::Native,
        }
    }
}

/// Append-only `i32` sequence encoded as 4-byte words in a byte buffer.
///
/// Word `i` occupies bytes `i * 4 .. i * 4 + 4`, native-endian. The byte
/// order is fixed at compile time and identical for every instance, so a
/// value always decodes on the instance that encoded it.
#[derive(Debug)]
pub struct BufferStore {
    buf: ByteBuf,
    len: usize,
}

impl BufferStore {
    /// Creates an empty store with room for `capacity` values in `mode`.
    ///
    /// `capacity` is a sizing hint, not a limit; the store grows on demand.
    #[must_use]
    pub fn with_capacity(capacity: usize, mode: BufferMode) -> Self {
        Self {
            buf: ByteBuf::allocate(capacity * WORD, mode),
            len: 0,
        }
    }

    /// The residency mode this store was created with.
    #[must_use]
    pub fn mode(&self) -> BufferMode {
        self.buf.mode()
    }

    fn grow(&mut self) {
        let new_capacity = grow_capacity(self.capacity(), self.len + 1);
        let mut next = ByteBuf::allocate(new_capacity * WORD, self.buf.mode());
        let live = self.len * WORD;
        next.bytes_mut()[..live].copy_from_slice(&self.buf.bytes()[..live]);
        self.buf = next;
    }
}

impl IntStore for BufferStore {
    fn push(&mut self, value: i32) {
        if self.len == self.capacity() {
            self.grow();
        }
        let offset = self.len * WORD;
        self.buf.bytes_mut()[offset..offset + WORD].copy_from_slice(&value.to_ne_bytes());
        self.len += 1;
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`; reading past the appended prefix is
    /// a contract violation, even where the buffer itself has spare bytes.
    fn get(&self, index: usize) -> i32 {
        assert!(
            index < self.len,
            "index {index} out of bounds for length {}",
            self.len
        );
        let offset = index * WORD;
        let word: [u8; WORD] = self.buf.bytes()[offset..offset + WORD]
            .try_into()
            .expect("word-sized slice");
        i32::from_ne_bytes(word)
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
        self.buf.size() / WORD
    }
}
