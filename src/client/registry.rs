//! Client registry
//!
//! Maps a connection's remote address to its record. Owned by the
//! coordinator, so there is never more than one writer.

use crate::client::ClientRecord;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::net::SocketAddr;

/// Registry for tracking active clients
pub struct ClientRegistry<C> {
    clients: HashMap<SocketAddr, ClientRecord<C>>,
}

impl<C> ClientRegistry<C> {
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }

    /// Insert a record unless one already exists for its address.
    /// On conflict the rejected record is handed back.
    pub fn insert(&mut self, record: ClientRecord<C>) -> Result<(), ClientRecord<C>> {
        match self.clients.entry(record.remote_addr()) {
            Entry::Occupied(_) => Err(record),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, addr: &SocketAddr) -> Option<ClientRecord<C>> {
        self.clients.remove(addr)
    }

    pub fn get(&self, addr: &SocketAddr) -> Option<&ClientRecord<C>> {
        self.clients.get(addr)
    }

    pub fn get_mut(&mut self, addr: &SocketAddr) -> Option<&mut ClientRecord<C>> {
        self.clients.get_mut(addr)
    }

    pub fn contains(&self, addr: &SocketAddr) -> bool {
        self.clients.contains_key(addr)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Every record except the one at `addr`.
    pub fn others(&self, addr: SocketAddr) -> impl Iterator<Item = &ClientRecord<C>> {
        self.clients
            .iter()
            .filter(move |(peer, _)| **peer != addr)
            .map(|(_, record)| record)
    }

    /// Mutable form of [`others`](Self::others), used for broadcasting.
    pub fn others_mut(&mut self, addr: SocketAddr) -> impl Iterator<Item = &mut ClientRecord<C>> {
        self.clients
            .iter_mut()
            .filter(move |(peer, _)| **peer != addr)
            .map(|(_, record)| record)
    }
}

impl<C> Default for ClientRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
