/// Errors from the HTTP transport layer.
use thiserror::Error;

/// Failures that prevent a request from completing a round trip.
///
/// A response with a non-success status is not a `ClientError`; callers decide
/// what a given status means.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured target is not an http(s) URL.
    #[error("Invalid target '{0}': expected an http:// or https:// URL")]
    InvalidTarget(String),

    /// The configured token cannot be sent as a header value.
    #[error("Invalid token: contains characters not allowed in an HTTP header")]
    InvalidToken,
}
