//! RingQueue - Fixed-Capacity FIFO Ring Buffer
//!
//! A bounded first-in-first-out queue backed by a slot array that is allocated
//! once and never grows. Two cursors (`head`, `tail`) wrap around the array
//! with modulo arithmetic and an item counter separates "full" from "empty".
//!
//! # Key Features
//!
//! - O(1) enqueue/dequeue, no allocation after construction
//! - Hard rejection on overflow (never overwrites the oldest item)
//! - Structured [`QueueError`] results, no mutation on failure
//! - Restartable front-to-back iteration for display
//! - Optional traffic counters via [`QueueMetrics`]
//!
//! # Example
//!
//! ```
//! use ringqueue::{Config, QueueError, RingQueue};
//!
//! let mut queue = RingQueue::with_config(Config::default())?;
//! for id in 0..5u64 {
//!     queue.enqueue(id)?;
//! }
//! assert!(queue.is_full());
//! assert_eq!(queue.enqueue(5), Err(QueueError::Full));
//!
//! assert_eq!(queue.tail(), 0);
//!
//! assert_eq!(queue.dequeue()?, 0);
//! queue.enqueue(5)?;
//! assert_eq!(queue.tail(), 1);
//!
//! for id in &queue {
//!     println!("upcoming: {id}");
//! }
//! # Ok::<(), QueueError>(())
//! ```
//!
//! The queue has no internal synchronization. Mutation takes `&mut self`, so
//! sharing one across threads needs a `Mutex` or a single owning task.

mod config;
mod error;
mod invariants;
mod metrics;
mod queue;

pub use config::{Config, DEFAULT_CAPACITY, PIECE_PREVIEW_CONFIG};
pub use error::QueueError;
pub use metrics::QueueMetrics;
pub use queue::{Iter, RingQueue};
