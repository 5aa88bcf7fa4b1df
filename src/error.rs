// src/error.rs
//! Error types for queue and heap operations

use std::fmt;

/// Errors that can occur during collection operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Dequeue attempted on an empty queue
    QueueEmpty,
    /// Peek or delete attempted on an empty heap
    HeapEmpty,
    /// Doubling the queue would exceed its maximum capacity
    CapacityExceeded {
        /// Capacity the queue tried to grow to (saturated on overflow)
        requested: usize,
        /// Largest capacity the queue may hold
        max: usize,
    },
}

impl CollectionError {
    /// Returns `true` for the empty-container variants.
    ///
    /// Handy when draining in a loop where emptiness is the stop condition.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::QueueEmpty | Self::HeapEmpty)
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueEmpty => write!(f, "Queue empty"),
            Self::HeapEmpty => write!(f, "Heap empty"),
            Self::CapacityExceeded { requested, max } => {
                write!(f, "Capacity exceeded: requested {}, max {}", requested, max)
            }
        }
    }
}

impl std::error::Error for CollectionError {}

// ============================================================================
// ERROR CONVERSION
// ============================================================================

/// Convert CollectionError to std::io::Error
impl From<CollectionError> for std::io::Error {
    fn from(err: CollectionError) -> Self {
        use std::io::ErrorKind;
        match err {
            CollectionError::QueueEmpty | CollectionError::HeapEmpty => {
                std::io::Error::new(ErrorKind::UnexpectedEof, err)
            }
            CollectionError::CapacityExceeded { .. } => {
                std::io::Error::new(ErrorKind::OutOfMemory, err)
            }
        }
    }
}

/// Convert CollectionError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<CollectionError> for anyhow::Error {
    fn from(err: CollectionError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Result type alias for collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_io() {
        let io_err: std::io::Error = CollectionError::QueueEmpty.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::UnexpectedEof);

        let io_err: std::io::Error = CollectionError::CapacityExceeded {
            requested: 8,
            max: 4,
        }
        .into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::OutOfMemory);
    }

    #[test]
    fn test_display() {
        assert_eq!(CollectionError::QueueEmpty.to_string(), "Queue empty");
        assert_eq!(CollectionError::HeapEmpty.to_string(), "Heap empty");
        assert_eq!(
            CollectionError::CapacityExceeded {
                requested: 64,
                max: 32
            }
            .to_string(),
            "Capacity exceeded: requested 64, max 32"
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(CollectionError::QueueEmpty.is_empty());
        assert!(CollectionError::HeapEmpty.is_empty());
        assert!(!CollectionError::CapacityExceeded { requested: 2, max: 1 }.is_empty());
    }

    #[test]
    fn test_result_ext() {
        let result: Result<i64> = Ok(42);
        assert_eq!(result.into_io().unwrap(), 42);

        let result: Result<i64> = Err(CollectionError::HeapEmpty);
        assert_eq!(
            result.into_io().unwrap_err().kind(),
            std::io::ErrorKind::UnexpectedEof
        );
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn test_anyhow_conversion() {
        let anyhow_err: anyhow::Error = CollectionError::HeapEmpty.into();
        assert!(anyhow_err.to_string().contains("Heap empty"));
    }
}
