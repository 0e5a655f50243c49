//! Frame classification
//!
//! Turns the text of one read into a [`Frame`]. There is no reassembly: a
//! message longer than the read buffer arrives as several frames and each
//! is classified on its own.

use crate::protocol::commands::{COMMANDS, Command, Frame};

/// Classify one frame. Returns `None` for whitespace-only input.
pub fn classify(raw: &str) -> Option<Frame> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(&kind) = COMMANDS.get(trimmed) {
        return Some(Frame::Command(Command::new(kind, String::new())));
    }

    for (literal, &kind) in COMMANDS.iter().filter(|(_, kind)| kind.takes_argument()) {
        if let Some(rest) = trimmed.strip_prefix(*literal) {
            if rest.starts_with(char::is_whitespace) {
                let argument = rest.trim().to_string();
                return Some(Frame::Command(Command::new(kind, argument)));
            }
        }
    }

    if trimmed.starts_with('/') {
        return Some(Frame::Unrecognized(trimmed.to_string()));
    }

    Some(Frame::Message(raw.to_string()))
}
