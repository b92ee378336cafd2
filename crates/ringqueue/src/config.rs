use crate::QueueError;

/// Queue size used by the piece preview (five upcoming pieces).
pub const DEFAULT_CAPACITY: usize = 5;

/// Configuration for [`RingQueue`](crate::RingQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of slots, fixed for the lifetime of the queue
    pub capacity: usize,
    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl Config {
    /// Creates a new configuration with custom settings.
    pub const fn new(capacity: usize, enable_metrics: bool) -> Self {
        Self {
            capacity,
            enable_metrics,
        }
    }

    /// Checks that the configuration describes a usable queue.
    pub const fn validate(&self) -> Result<(), QueueError> {
        if self.capacity == 0 {
            return Err(QueueError::InvalidConfig {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            enable_metrics: false,
        }
    }
}

/// Piece preview configuration (5 slots, metrics on)
pub const PIECE_PREVIEW_CONFIG: Config = Config::new(DEFAULT_CAPACITY, true);
