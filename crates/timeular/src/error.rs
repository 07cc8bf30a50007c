//! Error taxonomy for API calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`Client`](crate::Client) operations.
///
/// Every call either returns the decoded JSON body or exactly one of these;
/// nothing is retried or swallowed inside the library (the sole exception is
/// the opt-in 401 re-authentication path, which retries once).
#[derive(Debug, Error)]
pub enum Error {
    /// The API key or secret was rejected before any request was made.
    #[error("invalid credentials: {reason}")]
    InvalidCredentials { reason: &'static str },

    /// Failed to build the underlying HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The sign-in exchange was refused by the API.
    #[error("sign-in failed with status {status}: {body}")]
    Authentication { status: StatusCode, body: String },

    /// An endpoint call returned a non-success status.
    #[error("API error (status {status}): {body}")]
    Api { status: StatusCode, body: String },

    /// The request never produced a response (connect failure, timeout, IO).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON the API promises.
    #[error("invalid response: {0}")]
    Decode(String),
}
