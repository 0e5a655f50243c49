//! Configuration management for RAX Chat Server
//!
//! Values come from an optional `config.toml`, then `RAX_CHAT_*` environment
//! overrides, then the built-in defaults for anything left unset. All of it is
//! read once at startup.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

use crate::identity::{MAX_HASH_COST, MIN_HASH_COST};

/// Environment variable prefix for overrides (`RAX_CHAT_PORT`, ...)
const ENV_PREFIX: &str = "RAX_CHAT";

/// Longest ban the server accepts (one year)
pub const MAX_BAN_DURATION_SECS: u64 = 365 * 24 * 60 * 60;

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    // ═══ NETWORK ═══
    /// IP address to bind the listening socket
    pub bind_address: String,

    /// Port for the listening socket
    pub port: u16,

    /// Bytes read per call. Each read becomes exactly one frame.
    pub buffer_size: usize,

    /// Capacity of the event queue shared by all listeners
    pub event_queue_capacity: usize,

    // ═══ ABUSE CONTROL ═══
    /// Minimum time between two accepted messages from one client
    pub min_message_interval_ms: u64,

    /// Strikes tolerated before the host gets banned
    pub max_strikes: u32,

    /// How long a ban lasts
    pub ban_duration_secs: u64,

    // ═══ PRIVACY ═══
    /// bcrypt cost used when anonymizing peer addresses
    pub hash_cost: u32,

    /// Mask peer addresses in server logs
    pub safe_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            buffer_size: 128,
            event_queue_capacity: 1024,
            min_message_interval_ms: 2000,
            max_strikes: 5,
            ban_duration_secs: 30,
            hash_cost: bcrypt::DEFAULT_COST,
            safe_mode: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::build(builder)
    }

    /// Parse configuration from a TOML document, without environment overrides
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder().add_source(File::from_str(contents, FileFormat::Toml));

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.buffer_size == 0 {
            return Err(ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            ));
        }

        if self.event_queue_capacity == 0 {
            return Err(ConfigError::Message(
                "event_queue_capacity must be greater than 0".into(),
            ));
        }

        if self.ban_duration_secs > MAX_BAN_DURATION_SECS {
            return Err(ConfigError::Message(format!(
                "ban_duration_secs cannot exceed {}",
                MAX_BAN_DURATION_SECS
            )));
        }

        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.hash_cost) {
            return Err(ConfigError::Message(format!(
                "hash_cost must be between {} and {}",
                MIN_HASH_COST, MAX_HASH_COST
            )));
        }

        Ok(())
    }

    /// Get bind address and port as a socket string
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get the message cooldown as Duration
    pub fn min_message_interval(&self) -> Duration {
        Duration::from_millis(self.min_message_interval_ms)
    }

    /// Get the ban length as Duration
    pub fn ban_duration(&self) -> Duration {
        Duration::from_secs(self.ban_duration_secs)
    }
}
