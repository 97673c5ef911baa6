//! Client error types
//!
//! Only transport-class failures are errors here. Application-level failures
//! (a well-formed `{status: "error"}` body, a non-2xx add) are ordinary values
//! returned by the API client.

use thiserror::Error;

/// A request that never produced a usable response
#[derive(Debug, Error)]
pub enum ClientError {
    /// The network layer rejected the request (offline, CORS, DNS, ...)
    #[error("network request failed: {0}")]
    Network(String),

    /// The response body was not the JSON shape we expected
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request payload could not be encoded
    #[error("could not encode request: {0}")]
    Encode(String),

    /// A browser facility the request needs is missing
    #[error("{0} is not available")]
    Unavailable(&'static str),
}

pub type Result<T> = std::result::Result<T, ClientError>;
