//! HTTP transport backed by [`reqwest`].
//!
//! Sends one GET per query with no retries. Failures are classified into
//! HTTP status errors, network errors and everything else. A body that
//! arrives but cannot be read or decoded is not a transport failure.

use serde_json::Value;
use url::Url;

use crate::error::{SearchError, TransportError};
use crate::transport::Transport;

/// Build a [`reqwest::Client`] configured for zero-click API requests.
///
/// The client follows at most 10 redirects and accepts brotli and gzip
/// encoded bodies. The User-Agent is set per request.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client() -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Map a request error onto the transport taxonomy.
fn classify(err: reqwest::Error) -> SearchError {
    if let Some(status) = err.status() {
        return TransportError::Status {
            code: status.as_u16(),
        }
        .into();
    }
    if err.is_builder() {
        return SearchError::Unexpected(format!("invalid request: {err}"));
    }
    if (err.is_body() || err.is_decode()) && !err.is_timeout() {
        return SearchError::Unexpected(format!("unreadable response body: {err}"));
    }
    TransportError::Network(err.to_string()).into()
}

/// Default [`Transport`] using a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a freshly built client.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the client cannot be constructed.
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client()?,
        })
    }

    /// Wrap an existing client, e.g. one configured with a proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn fetch_json(&self, url: &Url, user_agent: &str) -> Result<Value, SearchError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(classify)?
            .error_for_status()
            .map_err(classify)?;

        // The API labels its JSON as javascript, so decode the text ourselves.
        let body = response.text().await.map_err(classify)?;
        tracing::trace!(bytes = body.len(), "zero-click response received");

        serde_json::from_str(&body)
            .map_err(|e| SearchError::Unexpected(format!("response is not JSON: {e}")))
    }
}
