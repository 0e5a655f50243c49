//! Chat protocol implementation
//!
//! Handles frame classification against the command table and the text
//! the server writes back to clients.

pub mod commands;
pub mod parser;
pub mod responses;

pub use commands::{Command, CommandKind, Frame};
pub use parser::classify;
