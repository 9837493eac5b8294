// ── API error types ──

use thiserror::Error;

/// Errors surfaced while decoding a discovery-chain response.
#[derive(Debug, Error)]
pub enum Error {
    /// The response body was not a valid compiled discovery chain. This
    /// indicates an upstream data contract violation, not a recoverable
    /// condition.
    #[error("malformed discovery-chain response: {source}")]
    MalformedResponse {
        #[from]
        source: serde_json::Error,
    },
}
