//! Text rendering of the queue and the action menu.
//!
//! Everything here only reads the queue.

use crate::Piece;
use ringqueue::RingQueue;
use std::fmt::Write;

pub const QUEUE_HEADER: &str = "--- Queue state ---";
pub const QUEUE_FOOTER: &str = "-------------------";
pub const EMPTY_QUEUE: &str = "The queue is empty.";
pub const PROMPT: &str = "Choose an option: ";

/// Renders the live pieces front to back, e.g. `[I 0] [O 1] [T 2]`.
pub fn render_pieces<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{piece}");
    }
    out
}

pub fn render_queue(queue: &RingQueue<Piece>) -> String {
    let mut out = format!("\n{QUEUE_HEADER}\n");
    if queue.is_empty() {
        out.push_str(EMPTY_QUEUE);
        out.push('\n');
        return out;
    }
    out.push_str(&render_pieces(queue));
    out.push('\n');
    out.push_str(QUEUE_FOOTER);
    out.push('\n');
    out
}

pub fn render_menu() -> String {
    format!(
        "\nActions:\n\
         1 - Play piece (remove)\n\
         2 - Insert new piece\n\
         0 - Exit\n\
         {PROMPT}"
    )
}
