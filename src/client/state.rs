//! Module `state`
//!
//! Defines `ClientRecord`, everything the coordinator knows about one
//! connected client.

use std::net::SocketAddr;
use std::time::Instant;

/// State of one connected, non-banned client.
///
/// The display name starts empty and has no uniqueness constraint. The
/// identity is the anonymized address digest, computed once at connect time.
pub struct ClientRecord<C> {
    connection: C,
    remote_addr: SocketAddr,
    display_name: String,
    identity: String,
    last_message_at: Instant,
    strike_count: u32,
}

impl<C> ClientRecord<C> {
    /// New record; `last_message_at` starts at the connect time.
    pub fn new(connection: C, remote_addr: SocketAddr, identity: String, now: Instant) -> Self {
        Self {
            connection,
            remote_addr,
            display_name: String::new(),
            identity,
            last_message_at: now,
            strike_count: 0,
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.connection
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The anonymized digest shown to other clients.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn last_message_at(&self) -> Instant {
        self.last_message_at
    }

    pub fn strike_count(&self) -> u32 {
        self.strike_count
    }

    // --------------------
    // Setter methods
    // --------------------

    pub fn set_display_name(&mut self, name: String) {
        self.display_name = name;
    }

    /// Record an accepted message: refresh the timestamp and forgive strikes.
    pub fn accept_message(&mut self, now: Instant) {
        self.last_message_at = now;
        self.strike_count = 0;
    }

    /// Record a rejected message and return the new strike count.
    pub fn add_strike(&mut self) -> u32 {
        self.strike_count += 1;
        self.strike_count
    }

    /// Consume the record, handing back its connection handle.
    pub fn into_connection(self) -> C {
        self.connection
    }
}
