//! TCP service carrying commands as newline-delimited JSON.
//!
//! Each connection runs on its own task. Each request is executed on the
//! tokio blocking pool, since Write and Read scan their ranges while holding
//! the store lock and must not stall the reactor. Requests on one connection
//! are answered in order.

use std::future::Future;
use std::net::SocketAddr;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use crate::wire::{self, Response, UNKNOWN_REQUEST_ID};
use crate::{Error, Executor, Result, ServiceConfig};

/// A bound, not yet serving, token service.
pub struct Server {
    listener: TcpListener,
    executor: Executor,
    max_line_bytes: usize,
}

impl Server {
    /// Bind the listener described by `config`.
    pub async fn bind(config: &ServiceConfig, executor: Executor) -> Result<Self> {
        let listener = TcpListener::bind(config.addr()).await.map_err(|e| Error::Io {
            reason: format!("bind {}: {}", config.addr(), e),
        })?;
        Ok(Self {
            listener,
            executor,
            max_line_bytes: config.max_line_bytes,
        })
    }

    /// Address actually bound (resolves port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until the listener fails.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves. Connections already accepted keep
    /// running on their own tasks.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let addr = self.local_addr()?;
        info!(target: "tokenmngr::server", %addr, "Server started");

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!(target: "tokenmngr::server", %addr, "Server shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => {
                    let (stream, peer) = accepted?;
                    debug!(target: "tokenmngr::server", %peer, "Connection accepted");
                    let executor = self.executor.clone();
                    let max_line_bytes = self.max_line_bytes;
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, executor, max_line_bytes).await {
                            warn!(target: "tokenmngr::server", %peer, error = %e, "Connection failed");
                        }
                        debug!(target: "tokenmngr::server", %peer, "Connection closed");
                    });
                }
            }
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    executor: Executor,
    max_line_bytes: usize,
) -> Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    // One extra byte distinguishes "exactly at the limit" from "over it".
    let read_limit = max_line_bytes as u64 + 2;

    loop {
        line.clear();
        let n = (&mut reader).take(read_limit).read_until(b'\n', &mut line).await?;
        if n == 0 {
            return Ok(());
        }

        let mut end = line.len();
        while end > 0 && matches!(line[end - 1], b'\r' | b'\n') {
            end -= 1;
        }
        if end > max_line_bytes {
            let response = Response::failure(
                UNKNOWN_REQUEST_ID,
                Error::InvalidInput {
                    reason: format!("request line exceeds {} bytes", max_line_bytes),
                },
            );
            writer.write_all(wire::encode_line(&response)?.as_bytes()).await?;
            return Ok(());
        }
        let payload = match std::str::from_utf8(&line[..end]) {
            Ok(payload) => payload,
            Err(e) => {
                let response = Response::failure(
                    UNKNOWN_REQUEST_ID,
                    Error::Serialization {
                        reason: format!("request line is not valid UTF-8: {}", e),
                    },
                );
                writer.write_all(wire::encode_line(&response)?.as_bytes()).await?;
                continue;
            }
        };
        if payload.trim().is_empty() {
            continue;
        }

        let response = match wire::decode_request(payload) {
            Ok(request) => {
                debug!(
                    target: "tokenmngr::server",
                    request_id = request.id,
                    op = request.command.name(),
                    "Request received"
                );
                let executor = executor.clone();
                let result = tokio::task::spawn_blocking(move || executor.execute(request.command))
                    .await
                    .unwrap_or_else(|e| {
                        Err(Error::Internal {
                            reason: format!("request task failed: {}", e),
                        })
                    });
                Response::from_result(request.id, result)
            }
            Err(e) => Response::failure(UNKNOWN_REQUEST_ID, e),
        };

        writer.write_all(wire::encode_line(&response)?.as_bytes()).await?;
    }
}
