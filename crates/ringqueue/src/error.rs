//! Error types for ring queue operations.

use thiserror::Error;

/// Errors returned by [`RingQueue`](crate::RingQueue) operations.
///
/// A failed operation never mutates the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Enqueue attempted while every slot holds a live item.
    #[error("queue is full")]
    Full,

    /// Dequeue attempted on a queue with no live items.
    #[error("queue is empty")]
    Empty,

    /// The queue cannot be built with this capacity.
    #[error("invalid queue capacity {capacity}: must be greater than zero")]
    InvalidConfig { capacity: usize },
}

impl QueueError {
    /// Returns `true` if the queue is still usable after this error.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Full | Self::Empty)
    }

    /// Returns `true` if this error comes from construction and should abort startup.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}
