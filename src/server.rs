use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

use crate::inventory::Inventory;
use crate::protocol::{Request, Response};

/// TCP server
///
/// Speaks newline-delimited JSON: one request line in, one response line
/// out. Every connection runs on its own task; the inventory serializes
/// mutations internally.
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    inventory: Arc<Inventory>,
}

impl Server {
    /// Create and bind TCP server to the specified address
    pub async fn bind(addr: &str, inventory: Arc<Inventory>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        info!("TCP server bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            inventory,
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Parse one request line and produce its response
    fn process_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => request.dispatch(&self.inventory),
            Err(e) => Response::Err(format!("Failed to parse request: {e}")),
        }
    }

    /// Handle a single client connection
    async fn handle_connection(
        self: Arc<Self>,
        stream: TcpStream,
        peer_addr: SocketAddr,
    ) -> std::io::Result<()> {
        let (read_half, mut write_half) = stream.into_split();
        let mut lines = BufReader::new(read_half).lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            // Log the raw request line
            info!("Received request from {}: {}", peer_addr, line);

            let response = self.process_line(line);
            let mut encoded = response.encode();
            encoded.push('\n');

            // Send response
            if let Err(e) = write_half.write_all(encoded.as_bytes()).await {
                warn!("Failed to write response to {}: {}", peer_addr, e);
                break;
            }
        }

        info!("Connection handler ended for {}", peer_addr);
        Ok(())
    }

    /// Start server, accept and process connections
    pub async fn run(self: Arc<Self>) {
        info!("Server started, listening on {}", self.local_addr);

        loop {
            match self.listener.accept().await {
                Ok((stream, peer_addr)) => {
                    info!("New connection accepted from {}", peer_addr);

                    // Clone the Arc<Server> for the new connection
                    let server = Arc::clone(&self);

                    // Spawn an independent task for each connection
                    tokio::spawn(async move {
                        if let Err(e) = server.handle_connection(stream, peer_addr).await {
                            error!("Error handling connection from {}: {}", peer_addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Failed to accept connection: {}", e);
                }
            }
        }
    }
}
