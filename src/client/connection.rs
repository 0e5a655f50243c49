//! Module `connection`
//!
//! The write side of a client connection. Once a connection is registered its
//! handle belongs to the coordinator, which is the only task that writes to
//! it. The listener keeps the read side.

use std::future::Future;
use std::io;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::oneshot;

/// Handle used to write to a client and to close it.
pub trait Connection: Send + 'static {
    /// Write the whole buffer. An error means the connection is gone.
    fn send(&mut self, bytes: &[u8]) -> impl Future<Output = io::Result<()>> + Send;

    /// Close the connection. Also stops the connection's listener.
    /// Calling it more than once is harmless.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}

/// Write half of a TCP stream plus the signal that stops its listener.
pub struct TcpConnection {
    writer: OwnedWriteHalf,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TcpConnection {
    pub fn new(writer: OwnedWriteHalf, shutdown: oneshot::Sender<()>) -> Self {
        Self {
            writer,
            shutdown: Some(shutdown),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_none()
    }
}

impl Connection for TcpConnection {
    async fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.is_closed() {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "connection already closed",
            ));
        }
        self.writer.write_all(bytes).await?;
        self.writer.flush().await
    }

    async fn close(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            // Listener may already be gone
            let _ = shutdown.send(());
            let _ = self.writer.shutdown().await;
        }
    }
}
