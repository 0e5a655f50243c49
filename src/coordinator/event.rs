//! Module `event`
//!
//! Units of work delivered to the coordinator, tagged with the peer address
//! of the connection they came from.

use std::net::SocketAddr;

use crate::protocol::Frame;

pub struct Event<C> {
    pub addr: SocketAddr,
    pub kind: EventKind<C>,
}

pub enum EventKind<C> {
    /// A new connection. Carries the write handle, which the coordinator
    /// takes ownership of, and the already anonymized peer identity.
    Connected { connection: C, identity: String },
    /// The connection ended: EOF, read error, or closed by the coordinator.
    Disconnected,
    /// One classified read.
    Frame(Frame),
}

impl<C> Event<C> {
    pub fn connected(addr: SocketAddr, connection: C, identity: String) -> Self {
        Self {
            addr,
            kind: EventKind::Connected {
                connection,
                identity,
            },
        }
    }

    pub fn disconnected(addr: SocketAddr) -> Self {
        Self {
            addr,
            kind: EventKind::Disconnected,
        }
    }

    pub fn frame(addr: SocketAddr, frame: Frame) -> Self {
        Self {
            addr,
            kind: EventKind::Frame(frame),
        }
    }
}
