//! Contiguous native-array storage.

use crate::error::{IntVecError, Result};
use crate::growth::grow_capacity;
use crate::store::IntStore;

/// Append-only `i32` sequence stored in a contiguous native array.
///
/// The baseline layout: values live in `i32` slots with no encoding step.
/// Growth follows the shared doubling policy; `reserve_exact` keeps the
/// requested capacity observable instead of delegating to `Vec`'s own
/// growth heuristics.
#[derive(Debug)]
pub struct ArrayStore {
    items: Vec<i32>,
}

impl ArrayStore {
    /// Creates an empty store with room for `capacity` values.
    ///
    /// `capacity` is a sizing hint, not a limit; the store grows on demand.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl IntStore for ArrayStore {
    fn push(&mut self, value: i32) {
        if self.items.len() == self.items.capacity() {
            let new_capacity = grow_capacity(self.items.capacity(), self.items.len() + 1);
            self.items.reserve_exact(new_capacity - self.items.len());
        }
        self.items.push(value);
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`; reading past the end is a contract
    /// violation, surfaced here through slice bounds checking.
    fn get(&self, index: usize) -> i32 {
        self.items[index]
    }

    fn try_get(&self, index: usize) -> Result<i32> {
        self.items
            .get(index)
            .copied()
            .ok_or(IntVecError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            })
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.items.capacity()
    }
}
