//! Error type for the MCP protocol boundary.
//!
//! Library errors carry their upstream context; at the protocol edge they
//! collapse to an HTTP-like code plus a human-readable message, which is
//! what tool callers and resource readers actually see.

use rmcp::ErrorData as McpError;
use serde::Serialize;
use thiserror::Error;

/// Result type for MCP operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Protocol-boundary error with an HTTP-like status code.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct Error {
    /// HTTP status-like code (e.g. 502, 503).
    pub code: i32,
    /// Human-readable error message.
    pub message: String,
}

impl Error {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: 500,
            message: message.into(),
        }
    }

    /// Convert into the wire-level MCP error.
    pub fn into_mcp(self) -> McpError {
        McpError::internal_error(self.message, None)
    }
}

impl From<galactic_grid_lib::Error> for Error {
    fn from(err: galactic_grid_lib::Error) -> Self {
        let code = match &err {
            galactic_grid_lib::Error::UpstreamStatus { .. }
            | galactic_grid_lib::Error::UpstreamPayload { .. } => 502,
            galactic_grid_lib::Error::IssUnavailable { .. } => 503,
            _ => 500,
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}
