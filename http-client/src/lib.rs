//! Private HTTP client for Loxone miniserver communication
//!
//! This crate provides a minimal blocking HTTP client specifically designed
//! for talking to a Loxone miniserver. Every request carries the basic
//! credentials supplied at construction. The client performs no retries;
//! retry policy belongs to callers.

mod error;

pub use error::HttpError;

use std::time::Duration;

/// A minimal blocking HTTP client for miniserver communication
///
/// The host may carry an explicit port (`"192.168.1.50"` or
/// `"127.0.0.1:44331"`); request URLs are built as `http://{host}{path}`.
#[derive(Clone)]
pub struct MiniserverClient {
    client: reqwest::blocking::Client,
    host: String,
    user: String,
    password: String,
}

impl std::fmt::Debug for MiniserverClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniserverClient")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl MiniserverClient {
    /// Create a new client for the given miniserver
    ///
    /// Credentials are captured once and sent with every request.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| HttpError::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            host: host.into(),
            user: user.into(),
            password: password.into(),
        })
    }

    /// Host (and optional port) this client talks to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Fetch a JSON document from the miniserver
    ///
    /// A non-2xx status maps to [`HttpError::Status`] with the response body
    /// retained; a 2xx response that is not valid JSON maps to
    /// [`HttpError::Parse`].
    pub fn fetch_json(&self, path: &str) -> Result<serde_json::Value, HttpError> {
        let text = self.get(path)?;

        serde_json::from_str(&text).map_err(|e| HttpError::Parse(e.to_string()))
    }

    /// Issue a state-changing request to the miniserver
    ///
    /// The acknowledgment body is opaque; it is read only so it can be
    /// logged at debug level. Success is the HTTP status alone.
    pub fn send_action(&self, path: &str) -> Result<(), HttpError> {
        let body = self.get(path)?;
        tracing::debug!("Action {} acknowledged: {}", path, body.trim());
        Ok(())
    }

    fn get(&self, path: &str) -> Result<String, HttpError> {
        let url = format!("http://{}{}", self.host, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json")
            .send()
            .map_err(|e| HttpError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| HttpError::Connection(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!("GET {} failed with status {}: {}", url, status, body.trim());
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
