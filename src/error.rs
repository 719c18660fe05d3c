//! Error types for the isitdown MCP Server
//!
//! This module defines the error hierarchy for all operations in the server.
//! Note that the status checker itself never surfaces these to tool callers;
//! it renders every failure as prose. The hierarchy covers the MCP plumbing
//! (stdio loop, JSON encoding) and internal fetch-boundary errors.

use thiserror::Error;

/// Main error type for the isitdown MCP Server
#[derive(Error, Debug)]
pub enum IsitdownMcpError {
    /// Status lookup errors (caught at the fetch boundary)
    #[error("Status lookup error: {0}")]
    Status(#[from] StatusError),

    /// MCP protocol errors
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors raised while fetching the status page.
///
/// These never leave the checker: they are logged and collapsed into the
/// fixed indeterminate message.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Status page returned HTTP {status}")]
    RequestFailed { status: reqwest::StatusCode },
}

/// MCP protocol errors
#[derive(Error, Debug)]
#[allow(dead_code)] // Some variants reserved for future use
pub enum McpError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid tool arguments: {message}")]
    InvalidArguments { message: String },

    #[error("Transport error: {message}")]
    TransportError { message: String },
}

/// Result type alias for isitdown MCP operations
pub type Result<T> = std::result::Result<T, IsitdownMcpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = McpError::UnknownTool {
            name: "frobnicate".to_string(),
        };
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn test_error_conversion() {
        let mcp_err = McpError::TransportError {
            message: "stdin closed".to_string(),
        };
        let err: IsitdownMcpError = mcp_err.into();
        assert!(matches!(err, IsitdownMcpError::Mcp(_)));
    }
}
