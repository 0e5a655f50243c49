pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod protocol;
pub mod server;

pub use config::ServerConfig;
pub use server::Server;
