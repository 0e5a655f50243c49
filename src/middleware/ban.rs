//! Ban registry
//!
//! Temporary bans keyed by host (the peer IP without its port), so a banned
//! client cannot come back from a fresh port. Bans are never swept by a
//! timer; an expired entry is dropped the next time its host is looked up.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

pub struct BanRegistry {
    bans: HashMap<IpAddr, Instant>,
    duration: Duration,
}

impl BanRegistry {
    pub fn new(duration: Duration) -> Self {
        Self {
            bans: HashMap::new(),
            duration,
        }
    }

    /// Start (or restart) a ban for `host` at `now`.
    pub fn ban(&mut self, host: IpAddr, now: Instant) {
        self.bans.insert(host, now);
    }

    /// Time left on the ban for `host`, or `None` if it is not banned.
    /// A ban that has run out is removed here.
    pub fn remaining(&mut self, host: IpAddr, now: Instant) -> Option<Duration> {
        let started_at = *self.bans.get(&host)?;
        let elapsed = now.saturating_duration_since(started_at);

        if elapsed < self.duration {
            Some(self.duration - elapsed)
        } else {
            self.bans.remove(&host);
            None
        }
    }

    pub fn contains(&self, host: &IpAddr) -> bool {
        self.bans.contains_key(host)
    }

    pub fn len(&self) -> usize {
        self.bans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bans.is_empty()
    }
}
