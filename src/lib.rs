//! `intvec`: append-only `i32` sequences over three memory layouts.
//!
//! The crate exists to compare storage strategies for large primitive
//! sequences under linear-scan and random-lookup workloads:
//!
//! - [`ArrayStore`] — contiguous native `i32` slots, the baseline.
//! - [`BufferStore`] — 4-byte words in a byte buffer, resident either on
//!   the heap ([`BufferMode::Heap`]) or in a natively allocated block
//!   ([`BufferMode::Native`]).
//! - [`RawStore`] — 4-byte words behind a raw pointer, no bounds metadata
//!   consulted on release-build reads, release via move-only RAII handle.
//!
//! All variants share the [`IntStore`] surface and the same doubling
//! [`growth`] policy; [`IntSequence`] selects a variant at construction
//! through [`Backing`] and dispatches by `match`, keeping virtual calls out
//! of anything being measured. The measurement driver itself lives in
//! `benches/`, not here.

pub mod alloc;
pub mod array;
pub mod buffer;
pub mod error;
pub mod growth;
pub mod raw;
pub mod store;

pub use alloc::outstanding_bytes;
pub use array::ArrayStore;
pub use buffer::{BufferMode, BufferStore};
pub use error::{IntVecError, Result};
pub use raw::RawStore;
pub use store::{Backing, IntSequence, IntStore};
