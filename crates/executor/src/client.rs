//! Async client for the token service.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::wire::{self, Request, UNKNOWN_REQUEST_ID};
use crate::{Command, Error, Output, Result, TokenInfo};

/// A single connection to a token service.
///
/// Requests are sent one at a time; each call waits for its response.
///
/// ```ignore
/// let mut client = Client::connect("localhost:50051").await?;
/// client.create("t1").await?;
/// let partial = client.write("t1", "x", 0, 3, 6).await?;
/// ```
pub struct Client {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    next_id: u64,
}

impl Client {
    /// Connect to a running service.
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(reader),
            writer,
            next_id: 1,
        })
    }

    /// Send one command and wait for its result.
    ///
    /// Errors raised by the server come back as the same [`Error`] variant.
    pub async fn execute(&mut self, command: Command) -> Result<Output> {
        let id = self.next_id;
        self.next_id += 1;

        let line = wire::encode_line(&Request { id, command })?;
        self.writer.write_all(line.as_bytes()).await?;

        let mut response = String::new();
        if self.reader.read_line(&mut response).await? == 0 {
            return Err(Error::Io {
                reason: "connection closed by server".to_string(),
            });
        }

        let response = wire::decode_response(&response)?;
        if response.id != id {
            // Id 0 marks a request line the server could not decode.
            if !response.ok && response.id == UNKNOWN_REQUEST_ID {
                return response.into_result();
            }
            return Err(Error::Internal {
                reason: format!("response id {} does not match request id {}", response.id, id),
            });
        }
        response.into_result()
    }

    /// Create a token.
    pub async fn create(&mut self, id: &str) -> Result<bool> {
        match self.execute(Command::Create { id: id.to_string() }).await? {
            Output::Bool(ok) => Ok(ok),
            other => Err(unexpected("Create", other)),
        }
    }

    /// Write name and domain; returns the partial nonce.
    pub async fn write(&mut self, id: &str, name: &str, low: u64, mid: u64, high: u64) -> Result<u64> {
        let command = Command::Write {
            id: id.to_string(),
            name: name.to_string(),
            low,
            mid,
            high,
        };
        match self.execute(command).await? {
            Output::Partial(partial) => Ok(partial),
            other => Err(unexpected("Write", other)),
        }
    }

    /// Read a token; returns the final nonce.
    pub async fn read(&mut self, id: &str) -> Result<u64> {
        match self.execute(Command::Read { id: id.to_string() }).await? {
            Output::Final(final_) => Ok(final_),
            other => Err(unexpected("Read", other)),
        }
    }

    /// Drop a token.
    pub async fn drop_token(&mut self, id: &str) -> Result<bool> {
        match self.execute(Command::Drop { id: id.to_string() }).await? {
            Output::Bool(ok) => Ok(ok),
            other => Err(unexpected("Drop", other)),
        }
    }

    /// Snapshot a token.
    pub async fn inspect(&mut self, id: &str) -> Result<TokenInfo> {
        match self.execute(Command::Inspect { id: id.to_string() }).await? {
            Output::Token(info) => Ok(info),
            other => Err(unexpected("Inspect", other)),
        }
    }

    /// List live token ids.
    pub async fn list(&mut self) -> Result<Vec<String>> {
        match self.execute(Command::List).await? {
            Output::Ids(ids) => Ok(ids),
            other => Err(unexpected("List", other)),
        }
    }

    /// Ping the service; returns its version.
    pub async fn ping(&mut self) -> Result<String> {
        match self.execute(Command::Ping).await? {
            Output::Pong { version } => Ok(version),
            other => Err(unexpected("Ping", other)),
        }
    }
}

fn unexpected(op: &str, output: Output) -> Error {
    Error::Internal {
        reason: format!("unexpected output for {}: {:?}", op, output),
    }
}
