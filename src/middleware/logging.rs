//! Logging middleware
//!
//! Peer addresses go through [`peer`] before they reach the log so safe mode
//! can keep them out of it.

use std::net::SocketAddr;

const MASKED_ADDRESS: &str = "[SAFEMODE]";

/// Address as it should appear in server logs
pub fn peer(addr: SocketAddr, safe_mode: bool) -> String {
    if safe_mode {
        MASKED_ADDRESS.to_string()
    } else {
        addr.to_string()
    }
}
