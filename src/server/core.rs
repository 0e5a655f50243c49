use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot};

use crate::client::{TcpConnection, listen};
use crate::config::ServerConfig;
use crate::coordinator::{Coordinator, Event};
use crate::error::ServerError;
use crate::identity::{self, BcryptHasher, IdentityHasher, UNKNOWN_IDENTITY};
use crate::middleware::logging::peer;

pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
    hasher: Arc<dyn IdentityHasher>,
}

impl Server {
    /// Bind the listening socket. Failing to bind is fatal for the process.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let hasher = BcryptHasher::new(config.hash_cost)?;

        let addr = config.listen_socket();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        info!("Server bound to {}", addr);

        Ok(Self {
            listener,
            config: Arc::new(config),
            hasher: Arc::new(hasher),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Spawn the coordinator and accept connections forever.
    pub async fn start(self) {
        let (events, queue) = mpsc::channel(self.config.event_queue_capacity);
        tokio::spawn(Coordinator::new(&self.config).run(queue));

        info!(
            "Starting RAX chat server on {} (buffer {} bytes, cooldown {}ms, max strikes {}, ban {}s)",
            self.config.listen_socket(),
            self.config.buffer_size,
            self.config.min_message_interval_ms,
            self.config.max_strikes,
            self.config.ban_duration_secs
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let events = events.clone();
                    let config = Arc::clone(&self.config);
                    let hasher = Arc::clone(&self.hasher);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        handle_new_connection(stream, addr, events, config, hasher).await;
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

/// Anonymizes the peer, hands the write half to the coordinator with a
/// connect event, then becomes the connection's listener.
///
/// The connect event is queued before any frame from this connection, so
/// the coordinator always sees a client's connect first.
async fn handle_new_connection(
    stream: TcpStream,
    addr: SocketAddr,
    events: mpsc::Sender<Event<TcpConnection>>,
    config: Arc<ServerConfig>,
    hasher: Arc<dyn IdentityHasher>,
) {
    let identity = tokio::task::spawn_blocking(move || {
        identity::anonymize(&*hasher, &addr.to_string())
    })
    .await
    .unwrap_or_else(|e| {
        error!("Identity hashing task failed for {}: {}", peer(addr, config.safe_mode), e);
        UNKNOWN_IDENTITY.to_string()
    });

    let (read_half, write_half) = stream.into_split();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let connection = TcpConnection::new(write_half, shutdown_tx);

    if events
        .send(Event::connected(addr, connection, identity))
        .await
        .is_err()
    {
        warn!("Coordinator is gone, dropping connection {}", peer(addr, config.safe_mode));
        return;
    }

    listen(read_half, addr, events, shutdown_rx, config).await;
}
