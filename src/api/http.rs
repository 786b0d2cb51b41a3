/// Blocking HTTP implementation of [`ApiClient`].
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::debug;

use super::{ApiClient, ApiRequest, ApiResponse, ClientError};

/// Client for the platform REST API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    target: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a client for `target` (e.g. "http://localhost:8080").
    ///
    /// A trailing `/` on the target is dropped so request paths can start with one.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the target is not an http(s) URL, the token is not
    /// a valid header value, or the underlying client cannot be built.
    pub fn new(
        target: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        if !(target.starts_with("http://") || target.starts_with("https://")) {
            return Err(ClientError::InvalidTarget(target.to_owned()));
        }
        if let Some(token) = &token {
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::InvalidToken)?;
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            target: target.trim_end_matches('/').to_owned(),
            token,
        })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl ApiClient for HttpClient {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.target, request.path);
        debug!(method = %request.method, %url, "sending request");

        let mut builder = self.client.request(request.method, &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok(ApiResponse { status, body })
    }
}
