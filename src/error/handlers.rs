//! Error handlers
//!
//! Reporting and exit status mapping for fatal startup errors.

use crate::error::types::ServerError;
use log::error;

/// Log a fatal server error
pub fn handle_error(err: &ServerError) {
    error!("Chat Server Error: {}", err);
}

/// Convert error to a process exit code (sysexits.h values)
pub fn exit_code(err: &ServerError) -> i32 {
    match err {
        ServerError::Config(_) | ServerError::Identity(_) => 78,
        ServerError::Bind { .. } => 69,
        ServerError::Io(_) => 74,
    }
}
