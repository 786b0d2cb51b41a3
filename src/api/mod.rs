/// Platform API access: the client contract commands depend on, plus the HTTP
/// implementation used by the binary.
pub mod errors;
pub mod http;

pub use errors::ClientError;
pub use http::HttpClient;

use reqwest::{Method, StatusCode};

/// A single request to the platform API. `path` is appended verbatim to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// A `GET` with no body.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    /// A `POST` carrying an encoded JSON body.
    #[must_use]
    pub fn post_json(path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    /// A `DELETE` with no body.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            body: None,
        }
    }
}

/// Status and raw body of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Capability injected into every command to reach the platform API.
///
/// Implementations own host, authentication, and timeouts. Every response is
/// returned whatever its status; only transport failures are errors.
pub trait ApiClient {
    /// Perform one blocking round trip.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the request could not be completed.
    fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}
