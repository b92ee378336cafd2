//! Interactive piece queue.
//!
//! Run with: `cargo run -p piece-queue`
//! Set `PIECE_QUEUE_LOG=debug` to trace queue operations on stderr.

use piece_queue::{logging, Session, SessionConfig};
use ringqueue::PIECE_PREVIEW_CONFIG;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::level_from_env())?;

    let config = SessionConfig::default().with_queue(PIECE_PREVIEW_CONFIG);
    let mut session = Session::new(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
