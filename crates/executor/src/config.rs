//! Service configuration via `tokenmngr.toml`
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! service listening on `localhost:50051`. Command-line flags override the
//! file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Config file name looked up by the `serve` command.
pub const CONFIG_FILE_NAME: &str = "tokenmngr.toml";

/// Default listen host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 50051;

/// Service configuration loaded from `tokenmngr.toml`.
///
/// # Example
///
/// ```toml
/// host = "0.0.0.0"
/// port = 50051
/// # Longest accepted request line, in bytes
/// max_line_bytes = 65536
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Host or address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind. `0` asks the OS for an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Longest accepted request line, in bytes (newline excluded).
    #[serde(default = "default_max_line_bytes")]
    pub max_line_bytes: usize,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_line_bytes() -> usize {
    64 * 1024
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_line_bytes: default_max_line_bytes(),
        }
    }
}

impl ServiceConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ServiceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidInput` if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Io {
            reason: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::InvalidInput {
                reason: "host must not be empty".to_string(),
            });
        }
        if self.max_line_bytes == 0 {
            return Err(Error::InvalidInput {
                reason: "max_line_bytes must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# tokenmngr service configuration
#
# Host or address to bind
host = "localhost"

# TCP port to bind (0 = ephemeral)
port = 50051

# Longest accepted request line, in bytes
max_line_bytes = 65536
"#
    }
}
