//! The interactive command loop.
//!
//! A [`Session`] owns the piece queue and the factory. Commands are applied
//! one at a time; queue full/empty conditions become user messages and the
//! loop keeps going. Only I/O failures and bad construction parameters
//! escape as errors.

use crate::display::{render_menu, render_queue};
use crate::{Command, Piece, PieceFactory};
use log::{debug, info, warn};
use ringqueue::{Config, QueueError, RingQueue};
use std::fmt;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const INVALID_OPTION: &str = "Invalid option. Try again.";
pub const EXIT_MESSAGE: &str = "Leaving the game. See you!";
pub const QUEUE_FULL_MESSAGE: &str = "Queue full. Cannot insert more pieces.";
pub const QUEUE_EMPTY_MESSAGE: &str = "Queue empty. No pieces to play.";
pub const IDS_EXHAUSTED_MESSAGE: &str = "No more pieces can be generated.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("piece ids exhausted")]
    IdsExhausted,
}

/// Settings for a [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub queue: Config,
    /// Pieces inserted before the first prompt. `None` fills the queue.
    pub prefill: Option<usize>,
    /// Seed for the piece kinds. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn with_prefill(mut self, prefill: usize) -> Self {
        self.prefill = Some(prefill);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_queue(mut self, queue: Config) -> Self {
        self.queue = queue;
        self
    }
}

/// Result of applying one [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Inserted(Piece),
    Rejected(QueueError),
    /// The factory has no ids left; nothing was inserted.
    Exhausted,
    Exit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played(piece) => write!(f, "Piece played: {piece}"),
            Outcome::Inserted(piece) => write!(f, "Piece inserted: {piece}"),
            Outcome::Rejected(QueueError::Full) => f.write_str(QUEUE_FULL_MESSAGE),
            Outcome::Rejected(QueueError::Empty) => f.write_str(QUEUE_EMPTY_MESSAGE),
            Outcome::Rejected(err) => write!(f, "{err}"),
            Outcome::Exhausted => f.write_str(IDS_EXHAUSTED_MESSAGE),
            Outcome::Exit => f.write_str(EXIT_MESSAGE),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    queue: RingQueue<Piece>,
    factory: PieceFactory,
}

impl Session {
    /// Builds the queue and pre-fills it with freshly generated pieces.
    ///
    /// Fails fast with [`QueueError::InvalidConfig`] on a zero capacity.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let factory = match config.seed {
            Some(seed) => PieceFactory::with_seed(seed),
            None => PieceFactory::new(),
        };
        Self::with_factory(config, factory)
    }

    /// Like [`new`](Self::new) but draws pieces from `factory`; `config.seed`
    /// is ignored.
    pub fn with_factory(
        config: SessionConfig,
        factory: PieceFactory,
    ) -> Result<Self, SessionError> {
        let queue = RingQueue::with_config(config.queue)?;
        let mut session = Self { queue, factory };

        let prefill = config
            .prefill
            .unwrap_or(config.queue.capacity)
            .min(config.queue.capacity);
        for _ in 0..prefill {
            let piece = session.factory.next().ok_or(SessionError::IdsExhausted)?;
            session.queue.enqueue(piece)?;
        }

        info!(
            "session started: capacity {}, {} pieces queued",
            session.queue.capacity(),
            session.queue.len()
        );
        Ok(session)
    }

    pub fn queue(&self) -> &RingQueue<Piece> {
        &self.queue
    }

    /// Applies one command to the queue.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Play => match self.queue.dequeue() {
                Ok(piece) => {
                    debug!("played {piece}, {} left", self.queue.len());
                    Outcome::Played(piece)
                }
                Err(err) => {
                    info!("play rejected: {err}");
                    Outcome::Rejected(err)
                }
            },
            Command::Insert => {
                // The id is spent even if the queue turns the piece away
                let Some(piece) = self.factory.next() else {
                    warn!("insert rejected: piece ids exhausted");
                    return Outcome::Exhausted;
                };
                match self.queue.enqueue(piece) {
                    Ok(()) => {
                        debug!("inserted {piece}, {} queued", self.queue.len());
                        Outcome::Inserted(piece)
                    }
                    Err(err) => {
                        info!("insert of {piece} rejected: {err}");
                        Outcome::Rejected(err)
                    }
                }
            }
            Command::Exit => Outcome::Exit,
        }
    }

    /// Runs the prompt loop until `0` is entered or `input` runs dry.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<(), SessionError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(
            output,
            "Queue initialized with {} pieces.",
            self.queue.len()
        )?;

        let mut line = String::new();
        loop {
            write!(output, "{}{}", render_queue(&self.queue), render_menu())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("input closed");
                writeln!(output)?;
                writeln!(output, "{EXIT_MESSAGE}")?;
                break;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    debug!("{err}");
                    writeln!(output, "{INVALID_OPTION}")?;
                    continue;
                }
            };

            let outcome = self.apply(command);
            writeln!(output, "{outcome}")?;
            if outcome == Outcome::Exit {
                break;
            }
        }

        let metrics = self.queue.metrics();
        info!(
            "session ended: {} played, {} inserted, {} rejected",
            metrics.dequeued,
            metrics.enqueued,
            metrics.rejected()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringqueue::PIECE_PREVIEW_CONFIG;

    fn session() -> Session {
        Session::new(SessionConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_prefill_fills_queue() {
        let session = session();
        assert!(session.queue().is_full());
        let ids: Vec<u64> = session.queue().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_prefill_is_clamped_to_capacity() {
        let session = Session::new(SessionConfig::default().with_prefill(50)).unwrap();
        assert_eq!(session.queue().len(), 5);
    }

    #[test]
    fn test_zero_capacity_fails_fast() {
        let config = SessionConfig::default().with_queue(Config::new(0, false));
        let err = Session::new(config).err().unwrap();
        assert!(matches!(
            err,
            SessionError::Queue(QueueError::InvalidConfig { capacity: 0 })
        ));
    }

    #[test]
    fn test_insert_on_full_spends_id() {
        let mut session = session();

        assert_eq!(
            session.apply(Command::Insert),
            Outcome::Rejected(QueueError::Full)
        );

        let played = session.apply(Command::Play);
        assert!(matches!(played, Outcome::Played(p) if p.id == 0));

        // Id 5 went to the rejected piece
        match session.apply(Command::Insert) {
            Outcome::Inserted(piece) => assert_eq!(piece.id, 6),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(session.queue().tail(), 1);
    }

    #[test]
    fn test_play_until_empty() {
        let mut session = Session::new(
            SessionConfig::default()
                .with_queue(PIECE_PREVIEW_CONFIG)
                .with_prefill(2)
                .with_seed(9),
        )
        .unwrap();

        assert!(matches!(session.apply(Command::Play), Outcome::Played(_)));
        assert!(matches!(session.apply(Command::Play), Outcome::Played(_)));
        assert_eq!(
            session.apply(Command::Play),
            Outcome::Rejected(QueueError::Empty)
        );
        assert_eq!(session.queue().metrics().rejected_empty, 1);
    }

    #[test]
    fn test_outcome_messages() {
        use crate::PieceKind;

        let piece = Piece::new(PieceKind::I, 0);
        assert_eq!(Outcome::Played(piece).to_string(), "Piece played: [I 0]");
        assert_eq!(
            Outcome::Rejected(QueueError::Full).to_string(),
            QUEUE_FULL_MESSAGE
        );
        assert_eq!(
            Outcome::Rejected(QueueError::Empty).to_string(),
            QUEUE_EMPTY_MESSAGE
        );
        assert_eq!(Outcome::Exit.to_string(), EXIT_MESSAGE);
        assert_eq!(Outcome::Exhausted.to_string(), IDS_EXHAUSTED_MESSAGE);
    }

    fn factory_from(first_id: u64) -> PieceFactory {
        use crate::IdGenerator;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        PieceFactory::with_parts(IdGenerator::starting_at(first_id), StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_insert_after_last_id_is_exhausted() {
        let config = SessionConfig::default().with_prefill(0);
        let mut session = Session::with_factory(config, factory_from(u64::MAX)).unwrap();

        match session.apply(Command::Insert) {
            Outcome::Inserted(piece) => assert_eq!(piece.id, u64::MAX),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(session.apply(Command::Insert), Outcome::Exhausted);
        assert_eq!(session.queue().len(), 1);

        // Playing still works after exhaustion
        assert!(matches!(session.apply(Command::Play), Outcome::Played(p) if p.id == u64::MAX));
    }

    #[test]
    fn test_prefill_past_last_id_fails() {
        let config = SessionConfig::default().with_prefill(3);
        let err = Session::with_factory(config, factory_from(u64::MAX - 1)).unwrap_err();
        assert!(matches!(err, SessionError::IdsExhausted));
    }
}
