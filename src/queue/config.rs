// src/queue/config.rs
//! Queue sizing configuration.

/// Capacity used by [`StringQueue::new`](super::StringQueue::new).
pub const DEFAULT_CAPACITY: usize = 32;

/// Largest number of slots a queue can address.
///
/// Bounded by the allocation limit for a `Vec<String>`.
pub const MAX_QUEUE_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<String>();

/// Sizing limits for a [`StringQueue`](super::StringQueue).
///
/// # Examples
///
/// ```
/// use seccollections::prelude::*;
///
/// let queue = StringQueue::with_config(QueueConfig {
///     initial_capacity: 8,
///     max_capacity: 64,
/// });
/// assert_eq!(queue.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Number of slots allocated up front
    pub initial_capacity: usize,
    /// Growth beyond this fails with `CapacityExceeded`
    pub max_capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_capacity: MAX_QUEUE_CAPACITY,
        }
    }
}

impl QueueConfig {
    /// Default limits with a custom starting capacity.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueueConfig::default();
        assert_eq!(config.initial_capacity, 32);
        assert_eq!(config.max_capacity, MAX_QUEUE_CAPACITY);
    }

    #[test]
    fn test_with_initial_capacity() {
        let config = QueueConfig::with_initial_capacity(4);
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.max_capacity, MAX_QUEUE_CAPACITY);
    }
}
