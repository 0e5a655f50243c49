//! Client management system
//!
//! Connection handles, per-client state and the registry the coordinator
//! keeps it in, plus the per-connection listener that feeds the event queue.

pub mod connection;
pub mod listener;
pub mod registry;
pub mod state;

pub use connection::{Connection, TcpConnection};
pub use listener::listen;
pub use registry::ClientRegistry;
pub use state::ClientRecord;
