use crate::invariants::{
    debug_assert_bounded_count, debug_assert_cursor_consistency, debug_assert_live_offset,
    debug_assert_live_slot,
};
use crate::{Config, QueueError, QueueMetrics};
use std::iter::FusedIterator;

// =============================================================================
// CURSOR PROTOCOL
// =============================================================================
//
// Storage is a boxed slice of `capacity` slots allocated once in `new()` and
// never resized. Three counters describe the live region:
//
// - `head`:  index of the oldest live item (next to be dequeued)
// - `tail`:  index of the next free slot (next enqueue writes here)
// - `count`: number of live items, 0 ≤ count ≤ capacity
//
// `tail == (head + count) % capacity` always holds. When the queue is full
// and when it is empty `head == tail`; `count` tells the two apart, so no
// slot is sacrificed as a sentinel.
//
// Cursors wrap with `% capacity`, so any capacity > 0 works (no power-of-two
// masking).
//
// =============================================================================

/// A bounded FIFO queue over a fixed, preallocated ring of slots.
///
/// Enqueueing into a full queue is rejected with [`QueueError::Full`]; the
/// oldest item is never overwritten. Dequeueing from an empty queue is
/// rejected with [`QueueError::Empty`]. Rejected operations leave the queue
/// untouched.
///
/// # Example
///
/// ```
/// use ringqueue::{QueueError, RingQueue};
///
/// let mut queue = RingQueue::new(2)?;
/// queue.enqueue("I")?;
/// queue.enqueue("O")?;
/// assert_eq!(queue.enqueue("T"), Err(QueueError::Full));
///
/// assert_eq!(queue.dequeue()?, "I");
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), ["O"]);
/// # Ok::<(), QueueError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RingQueue<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    count: usize,
    enable_metrics: bool,
    metrics: QueueMetrics,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    ///
    /// Fails with [`QueueError::InvalidConfig`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Self::with_config(Config::new(capacity, false))
    }

    /// Creates an empty queue from a [`Config`].
    pub fn with_config(config: Config) -> Result<Self, QueueError> {
        config.validate()?;

        let slots = std::iter::repeat_with(|| None)
            .take(config.capacity)
            .collect::<Box<[Option<T>]>>();

        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            count: 0,
            enable_metrics: config.enable_metrics,
            metrics: QueueMetrics::new(),
        })
    }

    // =========================================================================
    // STATUS
    // =========================================================================

    /// Returns the fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live items.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Index of the oldest live item (or of the next one, when empty).
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the slot the next enqueue writes to.
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Returns a snapshot of the counters. All zero unless metrics are enabled.
    pub fn metrics(&self) -> QueueMetrics {
        self.metrics
    }

    // =========================================================================
    // PRODUCER SIDE
    // =========================================================================

    /// Appends `item` at the back of the queue.
    ///
    /// Returns [`QueueError::Full`] when every slot is live; `item` is dropped
    /// and the queue is unchanged.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            if self.enable_metrics {
                self.metrics.rejected_full += 1;
            }
            return Err(QueueError::Full);
        }

        let capacity = self.capacity();
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % capacity;
        self.count += 1;

        debug_assert_bounded_count!(self.count, capacity);
        debug_assert_cursor_consistency!(self.head, self.tail, self.count, capacity);

        if self.enable_metrics {
            self.metrics.enqueued += 1;
            self.metrics.high_water_mark = self.metrics.high_water_mark.max(self.count);
        }
        Ok(())
    }

    // =========================================================================
    // CONSUMER SIDE
    // =========================================================================

    /// Removes the oldest item and hands ownership to the caller.
    ///
    /// Returns [`QueueError::Empty`] when there is nothing to remove.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(self.reject_empty());
        }

        debug_assert_live_slot!(self.slots[self.head].is_some(), self.head, self.count);
        let Some(item) = self.slots[self.head].take() else {
            return Err(self.reject_empty());
        };

        let capacity = self.capacity();
        self.head = (self.head + 1) % capacity;
        self.count -= 1;

        debug_assert_cursor_consistency!(self.head, self.tail, self.count, capacity);

        if self.enable_metrics {
            self.metrics.dequeued += 1;
        }
        Ok(item)
    }

    fn reject_empty(&mut self) -> QueueError {
        if self.enable_metrics {
            self.metrics.rejected_empty += 1;
        }
        QueueError::Empty
    }

    /// Returns the oldest item without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Drops every live item and resets both cursors to slot 0.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Iterates over the live items, oldest first, without consuming them.
    ///
    /// The iterator walks `len()` slots from `head`, wrapping at the end of
    /// storage. Calling `iter()` again restarts from the current head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            pos: self.head,
            offset: 0,
            count: self.count,
        }
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// ITERATOR
// =============================================================================

/// Front-to-back iterator over a [`RingQueue`]. Created by [`RingQueue::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    pos: usize,
    offset: usize,
    count: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset == self.count {
            return None;
        }
        debug_assert_live_offset!(self.offset, self.count);

        let item = self.slots[self.pos].as_ref();
        self.pos = (self.pos + 1) % self.slots.len();
        self.offset += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// =============================================================================
// TESTS
// =============================================================================
