//! The shared capability surface and backing selection.

use crate::array::ArrayStore;
use crate::buffer::{BufferMode, BufferStore};
use crate::error::Result;
use crate::raw::RawStore;

/// Capability surface shared by every store variant.
///
/// An `IntStore` is an ordered, append-only sequence of `i32`. Indices
/// `0..len()` are valid for read; everything past that is out of contract.
/// The trait exists so the bench harness and tests can treat the variants
/// uniformly, but each variant is also usable directly so that measurements
/// stay monomorphized.
pub trait IntStore {
    /// Appends `value` at position `len()`, growing the backing resource
    /// if it is full.
    fn push(&mut self, value: i32);

    /// Returns the value at `index`.
    ///
    /// Precondition: `index < self.len()`. The checked variants panic on
    /// violation; [`RawStore`] only detects it in debug builds.
    fn get(&self, index: usize) -> i32;

    /// Bounds-checked read, for callers that want an error instead of the
    /// `get` contract.
    ///
    /// # Errors
    ///
    /// Returns [`IntVecError::IndexOutOfBounds`](crate::IntVecError::IndexOutOfBounds)
    /// if `index >= self.len()`.
    fn try_get(&self, index: usize) -> Result<i32>;

    /// Number of values appended so far.
    fn len(&self) -> usize;

    /// Allocated slot count; always `>= len()`.
    fn capacity(&self) -> usize;

    /// True if nothing has been appended.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Backing resource selection for [`IntSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    /// Contiguous native `i32` array.
    Array,
    /// Byte buffer resident on the managed heap (`Vec<u8>`).
    BufferHeap,
    /// Byte buffer in a natively allocated block.
    BufferNative,
    /// Raw block addressed through pointer arithmetic, no bounds metadata
    /// consulted on reads.
    Raw,
}

/// An `i32` sequence over a caller-selected backing.
///
/// A closed tagged union rather than a boxed trait object: every operation
/// dispatches by `match`, so no virtual-call overhead pollutes the
/// per-variant measurements.
#[derive(Debug)]
pub enum IntSequence {
    /// See [`ArrayStore`].
    Array(ArrayStore),
    /// See [`BufferStore`].
    Buffer(BufferStore),
    /// See [`RawStore`].
    Raw(RawStore),
}

impl IntSequence {
    /// Creates an empty sequence over `backing` with room for `capacity`
    /// values. `capacity` is a sizing hint, not a limit.
    #[must_use]
    pub fn with_capacity(capacity: usize, backing: Backing) -> Self {
        match backing {
            Backing::Array => Self::Array(ArrayStore::with_capacity(capacity)),
            Backing::BufferHeap => {
                Self::Buffer(BufferStore::with_capacity(capacity, BufferMode::Heap))
            }
            Backing::BufferNative => {
                Self::Buffer(BufferStore::with_capacity(capacity, BufferMode::Native))
            }
            Backing::Raw => Self::Raw(RawStore::with_capacity(capacity)),
        }
    }

    /// Releases the backing resource now instead of at end of scope.
    ///
    /// Dropping the sequence has the same effect; this spelling exists for
    /// callers that want the release to be visible at the call site. It is
    /// a no-op beyond `Drop` for every variant.
    pub fn dispose(self) {}
}

impl IntStore for IntSequence {
    fn push(&mut self, value: i32) {
        match self {
            Self::Array(s) => s.push(value),
            Self::Buffer(s) => s.push(value),
            Self::Raw(s) => s.push(value),
        }
    }

    fn get(&self, index: usize) -> i32 {
        match self {
            Self::Array(s) => s.get(index),
            Self::Buffer(s) => s.get(index),
            Self::Raw(s) => s.get(index),
        }
    }

    fn try_get(&self, index: usize) -> Result<i32> {
        match self {
            Self::Array(s) => s.try_get(index),
            Self::Buffer(s) => s.try_get(index),
            Self::Raw(s) => s.try_get(index),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Array(s) => s.len(),
            Self::Buffer(s) => s.len(),
            Self::Raw(s) => s.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Self::Array(s) => s.capacity(),
            Self::Buffer(s) => s.capacity(),
            Self::Raw(s) => s.capacity(),
        }
    }
}
