//! Result nodes built from a zero-click response.
//!
//! Every kind of result implements [`ResultNode`], which is all the renderer
//! needs: a display name, a completeness check, nested children and the HTML
//! for the node's own content. Constructors take the whole response document
//! (or list item) and default every missing or non-text field to `""`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::sanitize::space_anchor_tags;

/// Common view over every result kind.
pub trait ResultNode: fmt::Debug + Send + Sync {
    /// Header text for this node, if it has one.
    fn name(&self) -> Option<&str>;

    /// Whether the node carries user-meaningful content.
    fn is_complete(&self) -> bool {
        false
    }

    /// Nested results, in display order.
    fn children(&self) -> &[ResultItem] {
        &[]
    }

    /// HTML for this node's own content, or `None` when there is nothing to show.
    fn render_html(&self) -> Option<String>;

    /// HTML for the flat list layout, where nested topics are inlined.
    ///
    /// Defaults to [`ResultNode::render_html`].
    fn render_inline_html(&self) -> Option<String> {
        self.render_html()
    }
}

/// Read a text field from a JSON object, defaulting to `""`.
///
/// Numbers and booleans are stringified; arrays, objects, `null` and
/// missing keys all become empty.
pub(crate) fn text_field(doc: &Value, key: &str) -> String {
    match doc.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Anchor markup for `url`, labelled with `display` or the URL itself.
pub(crate) fn html_link(url: &str, display: &str) -> String {
    let label = if display.is_empty() { url } else { display };
    format!(r#"<a href="{url}">{label}</a>"#)
}

fn non_empty(html: String) -> Option<String> {
    if html.is_empty() {
        None
    } else {
        Some(html)
    }
}

/// An instant answer (calculator, conversions, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Instant answer text (`Answer`).
    pub text: String,
    /// Kind of answer reported by the API, e.g. `calc`.
    pub answer_type: String,
}

impl Answer {
    pub fn from_json(doc: &Value) -> Self {
        Self {
            text: text_field(doc, "Answer"),
            answer_type: text_field(doc, "AnswerType"),
        }
    }
}

impl ResultNode for Answer {
    fn name(&self) -> Option<&str> {
        Some("Answer")
    }

    fn is_complete(&self) -> bool {
        !self.text.is_empty()
    }

    fn render_html(&self) -> Option<String> {
        non_empty(self.text.clone())
    }

    fn render_inline_html(&self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }
        if self.answer_type.is_empty() {
            Some(self.text.clone())
        } else {
            Some(format!("<b>[{}]</b> {}", self.answer_type, self.text))
        }
    }
}

/// Topic summary, usually from an encyclopedia.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Abstract {
    /// Abstract with markup (`Abstract`).
    pub html: String,
    /// Plain-text abstract (`AbstractText`).
    pub text: String,
    /// Source article URL (`AbstractURL`).
    pub url: String,
    /// Source name, e.g. `Wikipedia` (`AbstractSource`).
    pub source: String,
    /// Topic heading (`Heading`).
    pub heading: String,
}

impl Abstract {
    pub fn from_json(doc: &Value) -> Self {
        Self {
            html: text_field(doc, "Abstract"),
            text: text_field(doc, "AbstractText"),
            url: text_field(doc, "AbstractURL"),
            source: text_field(doc, "AbstractSource"),
            heading: text_field(doc, "Heading"),
        }
    }
}

impl ResultNode for Abstract {
    fn name(&self) -> Option<&str> {
        Some("Abstract")
    }

    fn is_complete(&self) -> bool {
        !self.html.is_empty() || !self.text.is_empty()
    }

    fn render_html(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(3);
        if !self.heading.is_empty() {
            parts.push(format!("<b>{}</b>", self.heading));
        }
        if !self.html.is_empty() {
            parts.push(self.html.clone());
        } else if !self.text.is_empty() {
            parts.push(self.text.clone());
        }
        if !self.url.is_empty() {
            parts.push(html_link(&self.url, &self.source));
        }
        non_empty(parts.join(" - "))
    }
}

/// Dictionary definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Definition {
    /// Definition text (`Definition`).
    pub text: String,
    /// Source URL (`DefinitionURL`).
    pub url: String,
    /// Source name (`DefinitionSource`).
    pub source: String,
}

impl Definition {
    pub fn from_json(doc: &Value) -> Self {
        Self {
            text: text_field(doc, "Definition"),
            url: text_field(doc, "DefinitionURL"),
            source: text_field(doc, "DefinitionSource"),
        }
    }
}

impl ResultNode for Definition {
    fn name(&self) -> Option<&str> {
        Some("Definition")
    }

    fn is_complete(&self) -> bool {
        !self.text.is_empty()
    }

    fn render_html(&self) -> Option<String> {
        match (self.text.is_empty(), self.url.is_empty()) {
            (false, false) => Some(format!(
                "{} - {}",
                self.text,
                html_link(&self.url, &self.source)
            )),
            (false, true) => Some(self.text.clone()),
            (true, false) => Some(html_link(&self.url, &self.source)),
            (true, true) => None,
        }
    }
}

/// `!bang` redirect target. Never complete on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Redirect target for bang queries (`Redirect`).
    pub url: String,
}

impl Redirect {
    pub fn from_json(doc: &Value) -> Self {
        Self {
            url: text_field(doc, "Redirect"),
        }
    }
}

impl ResultNode for Redirect {
    fn name(&self) -> Option<&str> {
        Some("Redirect")
    }

    fn render_html(&self) -> Option<String> {
        if self.url.is_empty() {
            None
        } else {
            Some(html_link(&self.url, ""))
        }
    }
}

/// One entry of `Results` or `RelatedTopics`, possibly a named group of
/// nested topics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    /// Category name for topic groups (`Name`), empty for plain topics.
    pub name: String,
    /// Raw HTML fragment (`Result`).
    pub html: String,
    /// Plain-text description (`Text`).
    pub text: String,
    /// `FirstURL`.
    pub url: String,
    /// Nested topics of a category group (`Topics`).
    pub topics: Vec<ResultItem>,
}

impl ResultItem {
    /// Build an item from a list entry. Non-object entries become empty items.
    pub fn from_json(item: &Value) -> Self {
        Self {
            name: text_field(item, "Name"),
            html: text_field(item, "Result"),
            text: text_field(item, "Text"),
            url: text_field(item, "FirstURL"),
            topics: items_of(item, "Topics"),
        }
    }
}

impl ResultNode for ResultItem {
    fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    fn is_complete(&self) -> bool {
        !self.text.is_empty()
    }

    fn children(&self) -> &[ResultItem] {
        &self.topics
    }

    fn render_html(&self) -> Option<String> {
        if !self.html.is_empty() {
            Some(space_anchor_tags(&self.html))
        } else {
            non_empty(self.text.clone())
        }
    }

    fn render_inline_html(&self) -> Option<String> {
        let mut html = self.render_html().unwrap_or_default();
        if !self.name.is_empty() && !self.topics.is_empty() {
            let topics: Vec<String> = self
                .topics
                .iter()
                .filter_map(ResultNode::render_inline_html)
                .collect();
            if !topics.is_empty() {
                html.push_str(&format!("<h2>{}</h2>", self.name));
                html.push_str(&topics.join("<br>"));
            }
        }
        non_empty(html)
    }
}

/// A named list of results such as "Results" or "Related Topics".
/// Never complete on its own; its items are its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultList {
    /// Header text, e.g. `Results` or `Related Topics`.
    pub name: String,
    /// Entries in API order.
    pub items: Vec<ResultItem>,
}

impl ResultList {
    /// Build a list from the array stored under `key` in `doc`.
    pub fn from_json(name: &str, doc: &Value, key: &str) -> Self {
        let items = items_of(doc, key);
        tracing::debug!(list = name, count = items.len(), "result list built");
        Self {
            name: name.to_owned(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResultItem> {
        self.items.get(index)
    }
}

impl ResultNode for ResultList {
    fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    fn children(&self) -> &[ResultItem] {
        &self.items
    }

    fn render_html(&self) -> Option<String> {
        None
    }

    fn render_inline_html(&self) -> Option<String> {
        let items: Vec<String> = self
            .items
            .iter()
            .filter_map(ResultNode::render_inline_html)
            .collect();
        non_empty(items.join("<br>"))
    }
}

/// Stand-in for identifiers that resolve to nothing: no name, never
/// complete, no children, no HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyNode;

/// Shared [`EmptyNode`] instance handed out by the selector.
pub static EMPTY: EmptyNode = EmptyNode;

impl ResultNode for EmptyNode {
    fn name(&self) -> Option<&str> {
        None
    }

    fn render_html(&self) -> Option<String> {
        None
    }
}

fn items_of(doc: &Value, key: &str) -> Vec<ResultItem> {
    doc.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(ResultItem::from_json).collect())
        .unwrap_or_default()
}
