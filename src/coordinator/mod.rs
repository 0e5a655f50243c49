//! Connection coordinator
//!
//! The single owner of all shared chat state. Listeners and the accept loop
//! only ever talk to it through the event queue.

pub mod core;
pub mod event;

pub use self::core::Coordinator;
pub use event::{Event, EventKind};
