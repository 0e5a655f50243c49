//! Rate limiting middleware
//!
//! Per-client cooldown with escalating strikes. A message arriving sooner
//! than `min_interval` after the last accepted one is rejected and earns a
//! strike; more than `max_strikes` strikes gets the host banned. Strikes are
//! only forgiven by an accepted message, never by time alone.

use std::time::{Duration, Instant};

use crate::client::ClientRecord;

/// Outcome of checking one plain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Broadcast it. Strikes were reset.
    Accepted,
    /// Drop it and warn the sender.
    Rejected { strikes: u32 },
    /// Drop it, disconnect and ban the sender.
    Banned { strikes: u32 },
}

/// Cooldown/strike policy
#[derive(Debug, Clone, Copy)]
pub struct RateLimiter {
    min_interval: Duration,
    max_strikes: u32,
}

impl RateLimiter {
    pub fn new(min_interval: Duration, max_strikes: u32) -> Self {
        Self {
            min_interval,
            max_strikes,
        }
    }

    /// Check a message sent at `now` and update the record accordingly.
    pub fn check<C>(&self, record: &mut ClientRecord<C>, now: Instant) -> Verdict {
        let elapsed = now.saturating_duration_since(record.last_message_at());

        if elapsed >= self.min_interval {
            record.accept_message(now);
            return Verdict::Accepted;
        }

        let strikes = record.add_strike();
        if strikes > self.max_strikes {
            Verdict::Banned { strikes }
        } else {
            Verdict::Rejected { strikes }
        }
    }
}
