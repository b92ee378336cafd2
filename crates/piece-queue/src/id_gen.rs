/// Hands out strictly increasing piece ids.
///
/// Owned by a [`PieceFactory`](crate::PieceFactory); there is no global
/// counter. Ids are never reused, even after the piece leaves the queue.
/// Once `u64::MAX` has been handed out the generator is exhausted and
/// [`next`](Self::next) returns `None` from then on.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Starts numbering at `first` instead of 0.
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Returns the current id and advances the counter.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// The id the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> Option<u64> {
        self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
