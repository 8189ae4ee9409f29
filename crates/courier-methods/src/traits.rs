use async_trait::async_trait;
use courier_core::error::CourierError;
use serde_json::Value;

use crate::method::Request;

/// Transport seam: executes a built [`Request`] against the remote API.
///
/// Implementations own the HTTP client, the bot token, timeouts and any
/// retry policy. They hand back the decoded response envelope untouched.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable transport name.
    fn name(&self) -> &str;

    /// Send the request and return the decoded JSON envelope.
    async fn execute(&self, request: Request) -> Result<Value, CourierError>;
}
