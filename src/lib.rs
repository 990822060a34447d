//! # zeroclick
//!
//! Client and HTML formatter for the DuckDuckGo zero-click answer API.
//!
//! A query returns one loosely-typed JSON document. This crate turns it into
//! typed result nodes (answer, abstract, definition, redirect, results and
//! related topics) and renders a chosen subset of them as HTML sections.
//!
//! ## Design
//!
//! - One GET per query, no retries, no caching
//! - HTTP status and network failures become "no result"; contract
//!   violations surface as errors
//! - Two parse policies: strict (validated type code) and lenient (raw code)
//! - Rendering is pure and never fails
//!
//! ## Privacy
//!
//! - Queries are logged only at trace level

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod nodes;
pub mod render;
pub mod response;
pub mod sanitize;
pub mod transport;

use std::collections::BTreeMap;

pub use client::ZeroClickClient;
pub use config::{ClientConfig, ParsePolicy, RenderConfig};
pub use error::{Result, SearchError, TransportError};
pub use nodes::ResultNode;
pub use render::{render, render_list, NO_RESULTS};
pub use response::{ParsedResult, ResponseKind};
pub use transport::Transport;

/// Query the zero-click API with the default endpoint and lenient parsing.
///
/// `extra_params` are added to the query string and override the fixed
/// parameters. Returns `Ok(None)` if the request failed at the HTTP or
/// network level (the failure is logged).
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `user_agent` is blank, or
/// [`SearchError::Unexpected`] if the response is not JSON.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> zeroclick::Result<()> {
/// use std::collections::BTreeMap;
///
/// let result = zeroclick::search("rust language", "my-app/1.0", &BTreeMap::new()).await?;
/// let html = zeroclick::render(result.as_ref(), &zeroclick::RenderConfig::default());
/// println!("{html}");
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    user_agent: &str,
    extra_params: &BTreeMap<String, String>,
) -> Result<Option<ParsedResult>> {
    let config = ClientConfig {
        user_agent: user_agent.to_owned(),
        ..Default::default()
    };
    ZeroClickClient::new(config)?
        .search(query, extra_params)
        .await
}

/// Query the API and render the outcome in one step.
///
/// Transport failures render as [`NO_RESULTS`].
///
/// # Errors
///
/// Same as [`ZeroClickClient::search`].
pub async fn search_html<T: Transport>(
    client: &ZeroClickClient<T>,
    query: &str,
    render_config: &RenderConfig,
) -> Result<String> {
    let result = client.search(query, &BTreeMap::new()).await?;
    Ok(render(result.as_ref(), render_config))
}
