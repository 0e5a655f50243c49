//! Per-connection listener
//!
//! Reads one connection in a loop and turns every read into an event on the
//! shared queue. It never touches the registries: all it knows is its own
//! address, its read half and the queue.
//!
//! Framing is one read per frame with a fixed buffer. A message longer than
//! the buffer reaches the coordinator as several messages, and two messages
//! that arrive in the same read are relayed as one. Nothing is reassembled.

use log::{debug, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::{mpsc, oneshot};

use crate::config::ServerConfig;
use crate::coordinator::Event;
use crate::middleware::logging::peer;
use crate::protocol::classify;

/// Read frames until the connection ends, the client quits, an invalid frame
/// is sent or the coordinator closes the connection.
///
/// Quit and invalid frames are handed to the coordinator as they are. Every
/// other way of stopping is reported as a single disconnect event.
pub async fn listen<R, C>(
    mut reader: R,
    addr: SocketAddr,
    events: mpsc::Sender<Event<C>>,
    mut shutdown: oneshot::Receiver<()>,
    config: Arc<ServerConfig>,
) where
    R: AsyncRead + Unpin,
{
    let mut buffer = vec![0u8; config.buffer_size];
    let who = peer(addr, config.safe_mode);

    loop {
        let read = tokio::select! {
            _ = &mut shutdown => {
                debug!("Listener for {} stopped by coordinator", who);
                None
            }
            result = reader.read(&mut buffer) => {
                match result {
                    Ok(0) => {
                        debug!("Connection closed by client {}", who);
                        None
                    }
                    Ok(n) => Some(n),
                    Err(e) => {
                        debug!("Failed to read from {}: {}", who, e);
                        None
                    }
                }
            }
        };

        let Some(n) = read else {
            if events.send(Event::disconnected(addr)).await.is_err() {
                warn!("Event queue closed, dropping disconnect for {}", who);
            }
            return;
        };

        let text = String::from_utf8_lossy(&buffer[..n]);
        let Some(frame) = classify(&text) else {
            continue;
        };

        let terminal = frame.is_terminal();
        if events.send(Event::frame(addr, frame)).await.is_err() {
            warn!("Event queue closed, stopping listener for {}", who);
            return;
        }
        if terminal {
            return;
        }
    }
}
