//! Error types
//!
//! Startup failures are fatal and surface as `ServerError`. Everything that
//! goes wrong on a single connection is turned into a disconnect instead and
//! never reaches these types.

use std::fmt;
use std::io;

/// Identity hasher errors
#[derive(Debug)]
pub enum IdentityError {
    Hash(bcrypt::BcryptError),
    InvalidCost(u32),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::Hash(e) => write!(f, "Hashing failed: {}", e),
            IdentityError::InvalidCost(cost) => write!(f, "Invalid hash cost: {}", cost),
        }
    }
}

impl std::error::Error for IdentityError {}

impl From<bcrypt::BcryptError> for IdentityError {
    fn from(error: bcrypt::BcryptError) -> Self {
        IdentityError::Hash(error)
    }
}

/// Server startup errors
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    Identity(IdentityError),
    Bind { addr: String, source: io::Error },
    Io(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Identity(e) => write!(f, "Identity hasher error: {}", e),
            ServerError::Bind { addr, source } => {
                write!(f, "Failed to bind to {}: {}", addr, source)
            }
            ServerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Config(e) => Some(e),
            ServerError::Identity(e) => Some(e),
            ServerError::Bind { source, .. } => Some(source),
            ServerError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<IdentityError> for ServerError {
    fn from(error: IdentityError) -> Self {
        ServerError::Identity(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::Io(error)
    }
}
