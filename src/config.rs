//! Client and render configuration with sensible defaults.
//!
//! [`ClientConfig`] controls how the zero-click API is queried and how
//! strictly its response is parsed. [`RenderConfig`] controls which results
//! are turned into HTML and how.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;

/// Default zero-click API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.duckduckgo.com/";

/// Default User-Agent sent with each query.
pub const DEFAULT_USER_AGENT: &str = "zeroclick";

/// Default render order used when no priority list is configured.
pub const DEFAULT_PRIORITY: &[&str] = &[
    "answer",
    "abstract",
    "definition",
    "results",
    "redirect",
    "related",
];

/// How strictly the response document is checked while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Unknown type codes are a [`SearchError::MalformedResponse`].
    /// Disambiguation pages are skipped by the API.
    Strict,
    /// Type codes are stored verbatim and never rejected.
    /// Disambiguation pages are requested.
    #[default]
    Lenient,
}

impl ParsePolicy {
    /// Value of the `skip_disambig` query parameter for this policy.
    pub fn skip_disambig(&self) -> &'static str {
        match self {
            Self::Strict => "1",
            Self::Lenient => "0",
        }
    }
}

/// Configuration for querying the zero-click API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// API endpoint; query parameters are appended to it.
    pub endpoint: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Response parsing policy.
    pub parse_policy: ParsePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            parse_policy: ParsePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Load a configuration from a JSON document and validate it.
    ///
    /// Missing keys take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the JSON is invalid or the
    /// resulting configuration fails [`ClientConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SearchError::Config(format!("invalid client config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `endpoint` must be an absolute `http` or `https` URL
    /// - `user_agent` must not be blank
    pub fn validate(&self) -> Result<(), SearchError> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| SearchError::Config(format!("endpoint is not a valid URL: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchError::Config(
                "endpoint must use http or https".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SearchError::Config("user_agent must not be empty".into()));
        }
        Ok(())
    }
}

/// Options controlling how a parsed result is rendered to HTML.
///
/// Use [`Default::default()`] for the standard layout, or override fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Identifiers to render, in order. `None` uses [`DEFAULT_PRIORITY`];
    /// an explicit empty list renders nothing.
    pub results_priority: Option<Vec<String>>,
    /// Maximum number of paragraphs to render. `None` is unlimited.
    pub max_results: Option<usize>,
    /// Skip the paragraph (but not the header) of incomplete results.
    pub ignore_incomplete: bool,
    /// Keep related topics even when a primary result is complete.
    pub always_show_related: bool,
    /// Header level of top-level results; nested results go one deeper.
    pub header_start_level: usize,
    /// Suppress every `<hN>` header.
    pub hide_headers: bool,
    /// Suppress the attribution footer.
    pub hide_signature: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            results_priority: None,
            max_results: None,
            ignore_incomplete: false,
            always_show_related: false,
            header_start_level: 1,
            hide_headers: false,
            hide_signature: false,
        }
    }
}

impl RenderConfig {
    /// Load a configuration from a JSON document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the JSON is invalid or the
    /// resulting configuration fails [`RenderConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SearchError::Config(format!("invalid render config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates this configuration.
    ///
    /// Checks:
    /// - `header_start_level` must be at least 1
    /// - `max_results`, when set, must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.header_start_level == 0 {
            return Err(SearchError::Config(
                "header_start_level must be >= 1".into(),
            ));
        }
        if self.max_results == Some(0) {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// The priority list to render, falling back to [`DEFAULT_PRIORITY`].
    pub fn priority(&self) -> Vec<String> {
        match self.results_priority {
            Some(ref list) => list.clone(),
            None => DEFAULT_PRIORITY.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}
