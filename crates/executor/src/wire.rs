//! Request/Response envelope encoding for the tokenmngr wire protocol
//!
//! Newline-delimited JSON, one message per line:
//! - Request: `{"id": 7, "command": {"Read": {"id": "t1"}}}`
//! - Success response: `{"id": 7, "ok": true, "result": {"Final": 2}}`
//! - Error response: `{"id": 7, "ok": false, "error": {"TokenNotFound": {"id": "t1"}}}`
//!
//! A request that cannot be decoded is answered with id [`UNKNOWN_REQUEST_ID`].

use serde::{Deserialize, Serialize};

use crate::{Command, Error, Output, Result};

/// Response id used when the request id could not be recovered.
pub const UNKNOWN_REQUEST_ID: u64 = 0;

/// Wire protocol request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    /// Request ID (echoed in response)
    pub id: u64,
    /// Command to execute
    pub command: Command,
}

/// Wire protocol response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Request ID (from request)
    pub id: u64,
    /// Success or failure
    pub ok: bool,
    /// Result (if ok=true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Output>,
    /// Error (if ok=false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

impl Response {
    /// Create a success response
    pub fn success(id: u64, result: Output) -> Self {
        Response {
            id,
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn failure(id: u64, error: Error) -> Self {
        Response {
            id,
            ok: false,
            result: None,
            error: Some(error),
        }
    }

    /// Build a response from an execution result.
    pub fn from_result(id: u64, result: Result<Output>) -> Self {
        match result {
            Ok(output) => Response::success(id, output),
            Err(error) => Response::failure(id, error),
        }
    }

    /// Unwrap into the execution result the server produced.
    pub fn into_result(self) -> Result<Output> {
        match (self.ok, self.result, self.error) {
            (true, Some(output), _) => Ok(output),
            (false, _, Some(error)) => Err(error),
            (true, None, _) => Err(Error::Internal {
                reason: "success response without result".to_string(),
            }),
            (false, _, None) => Err(Error::Internal {
                reason: "error response without error".to_string(),
            }),
        }
    }
}

/// Encode a message as one JSON line, newline included.
pub fn encode_line<T: Serialize>(message: &T) -> Result<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}

/// Decode a request line. Surrounding whitespace is ignored.
pub fn decode_request(line: &str) -> Result<Request> {
    Ok(serde_json::from_str(line.trim())?)
}

/// Decode a response line. Surrounding whitespace is ignored.
pub fn decode_response(line: &str) -> Result<Response> {
    Ok(serde_json::from_str(line.trim())?)
}
