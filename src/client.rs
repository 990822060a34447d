//! Zero-click API client: query assembly, fetch, error policy, parse.

use std::collections::BTreeMap;

use url::Url;

use crate::config::ClientConfig;
use crate::error::{Result, SearchError, TransportError};
use crate::http::HttpTransport;
use crate::response::ParsedResult;
use crate::transport::Transport;

/// Client for the zero-click API.
///
/// Each [`search`](ZeroClickClient::search) issues exactly one request. The
/// client holds no per-query state, so one instance can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct ZeroClickClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl ZeroClickClient<HttpTransport> {
    /// Create a client using the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport: HttpTransport::new()?,
            config,
        })
    }
}

impl<T: Transport> ZeroClickClient<T> {
    /// Create a client over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request URL for `query`.
    ///
    /// Fixed parameters are `q`, `format=json`, `pretty=1`, `no_redirect=1`,
    /// `no_html=1` and `skip_disambig` (from the parse policy). Entries in
    /// `extra_params` are added on top and win over the fixed ones.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the endpoint is not a valid URL.
    pub fn query_url(&self, query: &str, extra_params: &BTreeMap<String, String>) -> Result<Url> {
        let mut params: BTreeMap<&str, &str> = BTreeMap::from([
            ("q", query),
            ("format", "json"),
            ("pretty", "1"),
            ("no_redirect", "1"),
            ("no_html", "1"),
            ("skip_disambig", self.config.parse_policy.skip_disambig()),
        ]);
        for (key, value) in extra_params {
            params.insert(key.as_str(), value.as_str());
        }

        Url::parse_with_params(&self.config.endpoint, params)
            .map_err(|e| SearchError::Config(format!("endpoint is not a valid URL: {e}")))
    }

    /// Query the API and parse the response.
    ///
    /// Returns `Ok(None)` when the request fails with an HTTP status or
    /// network error; the failure is logged at warn level.
    ///
    /// # Errors
    ///
    /// - [`SearchError::MalformedResponse`] if the response breaks the API
    ///   contract under [`crate::ParsePolicy::Strict`]
    /// - [`SearchError::Unexpected`] for any other fetch failure (logged at
    ///   error level first)
    pub async fn search(
        &self,
        query: &str,
        extra_params: &BTreeMap<String, String>,
    ) -> Result<Option<ParsedResult>> {
        tracing::trace!(query, "zero-click search");

        let url = self.query_url(query, extra_params)?;
        let doc = match self.transport.fetch_json(&url, &self.config.user_agent).await {
            Ok(doc) => doc,
            Err(SearchError::Transport(TransportError::Status { code })) => {
                tracing::warn!(status = code, "query failed with HTTP status error");
                return Ok(None);
            }
            Err(SearchError::Transport(TransportError::Network(reason))) => {
                tracing::warn!(network = %reason, "query failed with network error");
                return Ok(None);
            }
            Err(err) => {
                tracing::error!(error = %err, "unhandled error during query");
                return Err(err);
            }
        };

        let parsed = ParsedResult::from_json(doc, self.config.parse_policy)?;
        tracing::debug!(
            kind = %parsed.kind,
            results = parsed.results.len(),
            related = parsed.related.len(),
            "zero-click response parsed"
        );
        Ok(Some(parsed))
    }

    /// Blocking form of [`search`](ZeroClickClient::search) for synchronous
    /// callers. Runs the request on a single-threaded runtime.
    ///
    /// Must not be called from within an async runtime.
    ///
    /// # Errors
    ///
    /// Same as [`search`](ZeroClickClient::search), plus
    /// [`SearchError::Unexpected`] if the runtime cannot be started.
    pub fn search_blocking(
        &self,
        query: &str,
        extra_params: &BTreeMap<String, String>,
    ) -> Result<Option<ParsedResult>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SearchError::Unexpected(format!("failed to start runtime: {e}")))?;
        runtime.block_on(self.search(query, extra_params))
    }
}
