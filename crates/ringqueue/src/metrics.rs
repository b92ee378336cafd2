/// Optional counters for observing queue traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueMetrics {
    pub enqueued: u64,
    pub dequeued: u64,
    pub rejected_full: u64,
    pub rejected_empty: u64,
    /// Largest `len()` observed so far
    pub high_water_mark: usize,
}

impl QueueMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total operations turned away because of a full or empty queue.
    pub fn rejected(&self) -> u64 {
        self.rejected_full + self.rejected_empty
    }
}
