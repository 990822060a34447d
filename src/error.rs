//! Error types for the zeroclick crate.
//!
//! Transport failures are recoverable and are absorbed by the client into
//! a "no result" outcome. Everything else is surfaced to the caller.

/// Failures talking to the zero-click API endpoint.
///
/// These are expected environmental failures. [`crate::ZeroClickClient`]
/// logs them and returns `Ok(None)` instead of propagating them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {code}")]
    Status {
        /// Numeric HTTP status code.
        code: u16,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),
}

/// Errors surfaced by the zeroclick crate.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A transport failure. Only returned by [`crate::Transport`]
    /// implementations; the client converts it into "no result".
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response broke the API contract (strict parsing only).
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Any other failure while fetching, such as a body that is not JSON.
    #[error("unexpected error: {0}")]
    Unexpected(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid client or render configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for zeroclick results.
pub type Result<T> = std::result::Result<T, SearchError>;
