//! Error types for the miniserver HTTP client

use thiserror::Error;

/// Errors that can occur during miniserver communication
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network-level failure (DNS resolution, connect, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Non-2xx HTTP status returned by the miniserver
    ///
    /// The response body is kept for diagnostics; the miniserver reports
    /// rejected commands and auth failures this way.
    #[error("HTTP error: status {status}")]
    Status { status: u16, body: String },

    /// A 2xx response whose body is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
}
