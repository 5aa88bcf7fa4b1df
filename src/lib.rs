// src/lib.rs
//! # Secure Collections
//!
//! Two small, contiguous-memory collections with secure cleanup.
//!
//! Features:
//! - [`StringQueue`]: FIFO queue of strings on a circular buffer that doubles on overflow
//! - [`MaxHeap`]: binary max-heap of integers with O(log n) insert and delete
//! - Secure memory zeroing using `zeroize` crate on drop and on `burn()`
//! - Errors as values through [`CollectionError`]; nothing panics on empty containers
//!
//! Neither collection locks internally. Wrap one in a `Mutex` to share it
//! across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod heap;
pub mod queue;

// Re-export main types
pub use error::{CollectionError, Result, ResultExt};
pub use heap::MaxHeap;
pub use queue::{DEFAULT_CAPACITY, MAX_QUEUE_CAPACITY, QueueConfig, StringQueue};

/// Commonly used imports.
pub mod prelude {
    pub use crate::error::{CollectionError, Result, ResultExt};
    pub use crate::heap::MaxHeap;
    pub use crate::queue::{QueueConfig, StringQueue};
}
