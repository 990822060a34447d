//! HTML assembly: headers, paragraphs and footer.
//!
//! The output shape is fixed: an `<hN>` header per named node, a `<p>` per
//! node with content, and an attribution footer.

use crate::config::RenderConfig;
use crate::response::ParsedResult;

use super::linearize::linearize;
use super::selector::{Field, Selector, RELATED};

/// Returned whenever there is nothing to render.
pub const NO_RESULTS: &str = "Sorry, no results found";

/// Attribution footer appended unless `hide_signature` is set.
pub const SIGNATURE: &str = "<footer><small>Results from DuckDuckGo</small></footer>";

/// Render `result` as HTML according to `config`.
///
/// # Pipeline
///
/// 1. Drop `related` from the priority list when a non-related entry is
///    complete, unless `always_show_related` is set
/// 2. Resolve the priority list, substituting empty nodes for gaps
/// 3. Walk the nodes depth-first from `header_start_level`
/// 4. Emit a header for named nodes that have content or children
/// 5. Emit a paragraph for nodes with content (complete ones only when
///    `ignore_incomplete` is set), stopping after `max_results` paragraphs
/// 6. Append the footer, or return [`NO_RESULTS`] if nothing was emitted
///
/// Never fails; `None` (no result from the API) renders as [`NO_RESULTS`].
pub fn render(result: Option<&ParsedResult>, config: &RenderConfig) -> String {
    let Some(result) = result else {
        return NO_RESULTS.to_owned();
    };

    let mut priority = config.priority();
    if !config.always_show_related {
        let primary_complete = priority
            .iter()
            .filter_map(|id| id.parse::<Field>().ok())
            .filter(|field| !field.is_related())
            .filter_map(|field| field.resolve(result))
            .any(|node| node.is_complete());
        if primary_complete {
            tracing::trace!("complete primary result, dropping related topics");
            priority.retain(|id| id != RELATED);
        }
    }

    let roots = Selector::new(priority).resolve_all(result);
    let start_level = config.header_start_level.max(1);
    let limit = config.max_results.filter(|&max| max > 0);

    let mut parts: Vec<String> = Vec::new();
    let mut rendered = 0usize;

    for (level, node) in linearize(start_level, roots) {
        let html = node.render_html().unwrap_or_default();
        let valid = !html.is_empty() && (!config.ignore_incomplete || node.is_complete());

        if !config.hide_headers {
            if let Some(name) = node.name().filter(|name| !name.is_empty()) {
                if valid || !node.children().is_empty() {
                    parts.push(format!("<h{level}>{name}</h{level}>"));
                }
            }
        }

        if valid {
            parts.push(format!("<p>{html}</p>"));
            rendered += 1;
            if limit.is_some_and(|max| rendered >= max) {
                break;
            }
        }
    }

    parts.retain(|part| !part.is_empty());
    if parts.is_empty() {
        return NO_RESULTS.to_owned();
    }

    tracing::debug!(paragraphs = rendered, "rendered results");

    if !config.hide_signature {
        parts.push(SIGNATURE.to_owned());
    }
    parts.concat().trim().to_owned()
}

/// Render each resolvable identifier of `priority` to an HTML fragment.
///
/// Uses the flat layout of [`crate::nodes::ResultNode::render_inline_html`]: nested topics
/// are inlined into their parent instead of getting their own section.
/// Identifiers that resolve to nothing or render empty are left out.
pub fn render_list<I, S>(result: Option<&ParsedResult>, priority: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let Some(result) = result else {
        return Vec::new();
    };

    Selector::new(priority)
        .resolve_present(result)
        .into_iter()
        .filter_map(|(id, node)| {
            node.render_inline_html()
                .filter(|html| !html.is_empty())
                .map(|html| (id.to_owned(), html))
        })
        .collect()
}
