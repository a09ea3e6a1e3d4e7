//! Capacity growth policy shared by all three stores.

/// Capacity floor used when growing from an empty allocation.
pub const MIN_CAPACITY: usize = 16;

/// Returns the new capacity for a store that holds `current` slots and
/// needs room for at least `required` slots.
///
/// Doubling strategy: `max(required, current * 2)`, with a floor of
/// [`MIN_CAPACITY`] when `current` is 0. The result is never smaller than
/// `required` and never smaller than `current`.
#[must_use]
pub fn grow_capacity(current: usize, required: usize) -> usize {
    let doubled = if current == 0 {
        MIN_CAPACITY
    } else {
        current.saturating_mul(2)
    };
    doubled.max(required)
}
