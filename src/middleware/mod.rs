//! Server middleware
//!
//! Provides logging, rate limiting and ban bookkeeping used by the
//! coordinator.

pub mod ban;
pub mod logging;
pub mod rate_limit;

pub use ban::BanRegistry;
pub use rate_limit::{RateLimiter, Verdict};
