//! RAX Chat Server - Entry Point
//!
//! A line-oriented chat relay: every message a client sends is fanned out to
//! every other connected client.

use log::info;

use rax_chat_server::error::ServerError;
use rax_chat_server::error::handlers::{exit_code, handle_error};
use rax_chat_server::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Launching chat server...");

    let server = match load_and_bind().await {
        Ok(server) => server,
        Err(e) => {
            handle_error(&e);
            std::process::exit(exit_code(&e));
        }
    };

    server.start().await;
}

async fn load_and_bind() -> Result<Server, ServerError> {
    let config = ServerConfig::load()?;
    Server::bind(config).await
}
