//! Trait definition for the request transport.
//!
//! The client only needs "fetch the JSON document at this URL". The default
//! implementation is [`crate::http::HttpTransport`]; tests and embedders can
//! supply their own.

use serde_json::Value;
use url::Url;

use crate::error::SearchError;

/// Fetches a JSON document over some transport.
///
/// Implementations must report environmental failures as
/// [`SearchError::Transport`] so the client can absorb them. Any other
/// error variant is treated as a bug and propagated to the caller.
pub trait Transport: Send + Sync {
    /// GET `url` with the given User-Agent and decode the body as JSON.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Transport`] for HTTP status and network failures
    /// - [`SearchError::Unexpected`] if the body is not JSON
    fn fetch_json(
        &self,
        url: &Url,
        user_agent: &str,
    ) -> impl std::future::Future<Output = Result<Value, SearchError>> + Send;
}
