// src/queue/string_queue.rs
//! Circular-buffer FIFO queue for strings.
//!
//! The queue stores its elements in one contiguous slab of `String` slots
//! used as a ring, rather than a linked list of nodes. Enqueue and dequeue
//! are O(1) except when the ring is full: enqueue then doubles the slab,
//! which costs O(n) in the number of queued strings. Pick an initial
//! capacity that is not expected to need growth.
//!
//! # Memory Safety
//!
//! - Dequeued strings are moved out of their slot, never copied
//! - Strings still queued on drop are securely zeroed via `zeroize`
//! - [`StringQueue::burn`] wipes the contents explicitly

use super::config::QueueConfig;
use crate::error::{CollectionError, Result};
use std::fmt;
use tracing::{debug, trace};
use zeroize::Zeroize;

/// A growable FIFO queue of strings backed by a circular buffer.
///
/// # Example
///
/// ```rust
/// use seccollections::prelude::*;
///
/// let mut queue = StringQueue::new();
/// queue.enqueue("first")?;
/// queue.enqueue("second")?;
///
/// assert_eq!(queue.dequeue()?, "first");
/// assert_eq!(queue.dequeue()?, "second");
/// assert_eq!(queue.dequeue(), Err(CollectionError::QueueEmpty));
/// # Ok::<(), seccollections::CollectionError>(())
/// ```
pub struct StringQueue {
    /// Ring slots; `data.len()` is the capacity
    data: Vec<String>,
    /// Slot of the most recently enqueued string (`None` before the first write)
    head: Option<usize>,
    /// Slot behind the oldest string (`None` means the slot before index 0)
    tail: Option<usize>,
    /// Number of queued strings
    len: usize,
    /// Growth limit
    max_capacity: usize,
}

impl StringQueue {
    /// Creates an empty queue with the default capacity of 32.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Creates an empty queue with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if capacity exceeds [`MAX_QUEUE_CAPACITY`](super::MAX_QUEUE_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// use seccollections::StringQueue;
    ///
    /// let queue = StringQueue::with_capacity(128);
    /// assert_eq!(queue.capacity(), 128);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(QueueConfig::with_initial_capacity(capacity))
    }

    /// Creates an empty queue with custom sizing limits.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` exceeds `max_capacity`.
    pub fn with_config(config: QueueConfig) -> Self {
        assert!(
            config.initial_capacity <= config.max_capacity,
            "Queue capacity {} exceeds maximum {}",
            config.initial_capacity,
            config.max_capacity
        );

        let mut data = Vec::with_capacity(config.initial_capacity);
        data.resize_with(config.initial_capacity, String::new);

        Self {
            data,
            head: None,
            tail: None,
            len: 0,
            max_capacity: config.max_capacity,
        }
    }

    /// Returns the number of queued strings.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the ring.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the next enqueue has to grow the ring.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Moves a ring position one slot forward, wrapping at the end.
    #[inline(always)]
    fn advance(&self, pos: Option<usize>) -> usize {
        match pos {
            Some(p) if p + 1 < self.data.len() => p + 1,
            _ => 0,
        }
    }

    /// Appends a string to the back of the queue.
    ///
    /// Doubles the capacity first when the ring is full.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::CapacityExceeded` if the doubled capacity
    /// would overflow or pass the configured maximum. The string is not
    /// enqueued and the queue is left untouched.
    pub fn enqueue(&mut self, value: impl Into<String>) -> Result<()> {
        if self.len + 1 > self.data.len() {
            let new_capacity = self.grown_capacity()?;
            self.resize(new_capacity);
        }

        let head = self.advance(self.head);
        self.data[head] = value.into();
        self.head = Some(head);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest string.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::QueueEmpty` if nothing is queued.
    pub fn dequeue(&mut self) -> Result<String> {
        if self.len == 0 {
            return Err(CollectionError::QueueEmpty);
        }

        let tail = self.advance(self.tail);
        self.tail = Some(tail);
        self.len -= 1;
        Ok(std::mem::take(&mut self.data[tail]))
    }

    /// Capacity after one doubling, if within limits.
    fn grown_capacity(&self) -> Result<usize> {
        let current = self.data.len();
        let next = doubled(current);

        match next {
            Some(capacity) if capacity <= self.max_capacity => Ok(capacity),
            _ => {
                let requested = next.unwrap_or(usize::MAX);
                debug!(
                    capacity = current,
                    requested,
                    max = self.max_capacity,
                    "string queue cannot grow"
                );
                Err(CollectionError::CapacityExceeded {
                    requested,
                    max: self.max_capacity,
                })
            }
        }
    }

    /// Re-lays the queue out into a fresh ring of `new_capacity` slots.
    ///
    /// Head may sit before tail in the old ring, so a block copy could
    /// scramble the order. Draining through `dequeue` yields every string
    /// oldest-first, which is exactly the order of the new layout.
    fn resize(&mut self, new_capacity: usize) {
        let len = self.len;
        let old_capacity = self.data.len();

        let mut data = Vec::with_capacity(new_capacity);
        while let Ok(value) = self.dequeue() {
            data.push(value);
        }
        data.resize_with(new_capacity, String::new);

        self.data = data;
        self.len = len;
        self.head = len.checked_sub(1);
        self.tail = None;

        trace!(old_capacity, new_capacity, len, "string queue grown");
    }

    /// Drops every queued string, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in self.data.iter_mut() {
            *slot = String::new();
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Securely zeroes every queued string, then clears the queue.
    ///
    /// Use when the queue held sensitive data and is about to be reused.
    pub fn burn(&mut self) {
        for slot in self.data.iter_mut() {
            slot.zeroize();
        }
        self.clear();
    }
}

/// Ring size after one doubling, `None` on overflow.
///
/// An empty ring grows to a single slot.
#[inline]
fn doubled(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(1)
    } else {
        capacity.checked_mul(2)
    }
}

impl Default for StringQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringQueue {
    // Contents omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringQueue")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("max_capacity", &self.max_capacity)
            .finish()
    }
}

impl Drop for StringQueue {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}
