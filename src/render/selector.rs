//! Resolve priority-list identifiers to result nodes.
//!
//! Identifiers are either a bare field name (`answer`, `abstract`,
//! `definition`, `redirect`, `results`, `related`) or an indexed entry of one
//! of the lists (`results.0`, `related.3`). They are parsed once, when the
//! [`Selector`] is built, and resolved against any number of results.

use std::fmt;
use std::str::FromStr;

use crate::nodes::{ResultNode, EMPTY};
use crate::response::ParsedResult;

/// Identifier of the `related` list, the target of the escalation rule.
pub const RELATED: &str = "related";

/// A parsed priority-list identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Answer,
    Abstract,
    Definition,
    Redirect,
    Results,
    Related,
    /// One item of `results`.
    ResultAt(usize),
    /// One item of `related`.
    RelatedAt(usize),
}

/// Error for identifiers that name no field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown result field {:?}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let field = match id {
            "answer" => Self::Answer,
            "abstract" => Self::Abstract,
            "definition" => Self::Definition,
            "redirect" => Self::Redirect,
            "results" => Self::Results,
            "related" => Self::Related,
            _ => {
                let unknown = || UnknownField(id.to_owned());
                let (list, index) = id.split_once('.').ok_or_else(unknown)?;
                if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(unknown());
                }
                let index: usize = index.parse().map_err(|_| unknown())?;
                match list {
                    "results" => Self::ResultAt(index),
                    "related" => Self::RelatedAt(index),
                    _ => return Err(unknown()),
                }
            }
        };
        Ok(field)
    }
}

impl Field {
    /// Look this field up in `result`.
    ///
    /// Bare fields always resolve. Indexed fields resolve to the single item
    /// at that position, or `None` when the index is out of bounds.
    pub fn resolve<'a>(&self, result: &'a ParsedResult) -> Option<&'a dyn ResultNode> {
        let node: &'a dyn ResultNode = match *self {
            Self::Answer => &result.answer,
            Self::Abstract => &result.abstract_,
            Self::Definition => &result.definition,
            Self::Redirect => &result.redirect,
            Self::Results => &result.results,
            Self::Related => &result.related,
            Self::ResultAt(i) => result.results.get(i)?,
            Self::RelatedAt(i) => result.related.get(i)?,
        };
        Some(node)
    }

    /// Whether this field addresses the related-topics list or one of its items.
    pub fn is_related(&self) -> bool {
        matches!(self, Self::Related | Self::RelatedAt(_))
    }

    fn is_empty_list(&self, result: &ParsedResult) -> bool {
        match self {
            Self::Results => result.results.is_empty(),
            Self::Related => result.related.is_empty(),
            _ => false,
        }
    }
}

/// A priority list, parsed once and resolved per result.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    entries: Vec<(String, Option<Field>)>,
}

impl Selector {
    /// Parse a priority list. Unknown identifiers are kept and resolve to nothing.
    pub fn new<I, S>(priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = priority
            .into_iter()
            .map(|id| {
                let id = id.into();
                let field = id.parse::<Field>().ok();
                if field.is_none() {
                    tracing::trace!(id = %id, "priority entry names no field");
                }
                (id, field)
            })
            .collect();
        Self { entries }
    }

    /// The identifiers, in priority order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Resolve every entry, substituting [`EMPTY`] for anything that does
    /// not resolve. The output has one node per entry, in order.
    pub fn resolve_all<'a>(&self, result: &'a ParsedResult) -> Vec<&'a dyn ResultNode> {
        self.entries
            .iter()
            .map(|(_, field)| {
                field
                    .and_then(|f| f.resolve(result))
                    .unwrap_or(&EMPTY as &dyn ResultNode)
            })
            .collect()
    }

    /// Resolve entries that name something present, paired with their
    /// identifier. Unknown identifiers, out-of-bounds indexes and empty
    /// lists are skipped.
    pub fn resolve_present<'s, 'a>(
        &'s self,
        result: &'a ParsedResult,
    ) -> Vec<(&'s str, &'a dyn ResultNode)> {
        self.entries
            .iter()
            .filter_map(|(id, field)| {
                let field = (*field)?;
                if field.is_empty_list(result) {
                    return None;
                }
                field.resolve(result).map(|node| (id.as_str(), node))
            })
            .collect()
    }
}
