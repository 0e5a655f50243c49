//! Server core functionality
//!
//! Binds the listening socket, runs the accept loop and wires each new
//! connection to the coordinator.

pub mod core;

pub use self::core::Server;
