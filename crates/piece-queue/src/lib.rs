//! Piece Queue
//!
//! An interactive preview of upcoming game pieces. Pieces are generated by a
//! [`PieceFactory`] and held in a fixed-size [`ringqueue::RingQueue`]; the
//! player plays the front piece or asks for a new one at the back.
//!
//! # Example
//!
//! ```
//! use piece_queue::{Command, Outcome, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(1))?;
//! assert!(session.queue().is_full());
//!
//! match session.apply(Command::Play) {
//!     Outcome::Played(piece) => assert_eq!(piece.id, 0),
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! let input = b"2\n0\n";
//! let mut output = Vec::new();
//! session.run(&input[..], &mut output)?;
//! assert!(String::from_utf8_lossy(&output).contains("Piece inserted: ["));
//! # Ok::<(), piece_queue::SessionError>(())
//! ```

pub mod command;
pub mod display;
pub mod factory;
pub mod id_gen;
pub mod logging;
pub mod piece;
pub mod session;

pub use command::{Command, CommandError};
pub use factory::PieceFactory;
pub use id_gen::IdGenerator;
pub use piece::{Piece, PieceKind, UnknownPieceKind};
pub use session::{Outcome, Session, SessionConfig, SessionError};
