use crate::{IdGenerator, Piece, PieceKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces new pieces: a uniformly random kind plus the next sequential id.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    ids: IdGenerator,
    rng: StdRng,
}

impl PieceFactory {
    /// Creates a factory seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_parts(IdGenerator::new(), StdRng::from_entropy())
    }

    /// Creates a factory whose kind sequence is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_parts(IdGenerator::new(), StdRng::seed_from_u64(seed))
    }

    pub fn with_parts(ids: IdGenerator, rng: StdRng) -> Self {
        Self { ids, rng }
    }

    /// Builds the next piece. Every call consumes one id.
    ///
    /// Returns `None` once the id space is used up.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Piece> {
        let id = self.ids.next()?;
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        Some(Piece::new(kind, id))
    }

    /// The id the next piece will carry, `None` when exhausted.
    pub fn next_id(&self) -> Option<u64> {
        self.ids.peek()
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new()
    }
}
