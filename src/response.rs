//! Parsed zero-click response: the root aggregate handed to the renderer.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::config::ParsePolicy;
use crate::error::{Result, SearchError};
use crate::nodes::{text_field, Abstract, Answer, Definition, Redirect, ResultList};

/// Kind of response, from the single-letter `Type` code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ResponseKind {
    /// `A`
    Article,
    /// `D`
    Disambiguation,
    /// `C`
    Category,
    /// `N`
    Name,
    /// `E`
    Exclusive,
    /// Empty code: nothing found.
    Nothing,
    /// Any other code, kept verbatim under [`ParsePolicy::Lenient`].
    Unrecognized(String),
}

impl ResponseKind {
    /// Map a known type code, or `None` if the code is not recognised.
    pub fn from_code(code: &str) -> Option<Self> {
        let kind = match code {
            "A" => Self::Article,
            "D" => Self::Disambiguation,
            "C" => Self::Category,
            "N" => Self::Name,
            "E" => Self::Exclusive,
            "" => Self::Nothing,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the human-readable name of this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::Disambiguation => "disambiguation",
            Self::Category => "category",
            Self::Name => "name",
            Self::Exclusive => "exclusive",
            Self::Nothing => "nothing",
            Self::Unrecognized(code) => code,
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every result kind extracted from one API response.
///
/// All fields are always populated; absent data shows up as empty nodes
/// and empty lists, never as missing fields.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResult {
    /// Kind of response, from the `Type` code.
    pub kind: ResponseKind,
    /// Instant answer.
    pub answer: Answer,
    /// Topic summary.
    #[serde(rename = "abstract")]
    pub abstract_: Abstract,
    /// Dictionary definition.
    pub definition: Definition,
    /// `!bang` redirect target.
    pub redirect: Redirect,
    /// External results (`Results`).
    pub results: ResultList,
    /// Related topics (`RelatedTopics`).
    pub related: ResultList,
    #[serde(skip)]
    type_code: String,
    #[serde(skip)]
    raw: Value,
}

impl ParsedResult {
    /// Build a result from a decoded response document.
    ///
    /// Missing or non-text fields default to empty strings. Under
    /// [`ParsePolicy::Lenient`] a missing `Type` is treated as the empty code.
    ///
    /// # Errors
    ///
    /// Under [`ParsePolicy::Strict`], returns [`SearchError::MalformedResponse`]
    /// if the document is not a JSON object, has no `Type`, or its type code
    /// is unknown.
    /// [`ParsePolicy::Lenient`] never fails.
    pub fn from_json(doc: Value, policy: ParsePolicy) -> Result<Self> {
        if policy == ParsePolicy::Strict && !doc.is_object() {
            return Err(SearchError::MalformedResponse(
                "response is not a JSON object".into(),
            ));
        }
        if policy == ParsePolicy::Strict && doc.get("Type").is_none() {
            return Err(SearchError::MalformedResponse("missing type code".into()));
        }

        let type_code = text_field(&doc, "Type");
        let kind = match (ResponseKind::from_code(&type_code), policy) {
            (Some(kind), _) => kind,
            (None, ParsePolicy::Lenient) => ResponseKind::Unrecognized(type_code.clone()),
            (None, ParsePolicy::Strict) => {
                return Err(SearchError::MalformedResponse(format!(
                    "unknown type code {type_code:?}"
                )));
            }
        };

        Ok(Self {
            kind,
            answer: Answer::from_json(&doc),
            abstract_: Abstract::from_json(&doc),
            definition: Definition::from_json(&doc),
            redirect: Redirect::from_json(&doc),
            results: ResultList::from_json("Results", &doc, "Results"),
            related: ResultList::from_json("Related Topics", &doc, "RelatedTopics"),
            type_code,
            raw: doc,
        })
    }

    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Unexpected`] if `body` is not JSON, otherwise
    /// as [`ParsedResult::from_json`].
    pub fn from_json_str(body: &str, policy: ParsePolicy) -> Result<Self> {
        let doc: Value = serde_json::from_str(body)
            .map_err(|e| SearchError::Unexpected(format!("response is not JSON: {e}")))?;
        Self::from_json(doc, policy)
    }

    /// The `Type` code exactly as the API sent it.
    pub fn type_code(&self) -> &str {
        &self.type_code
    }

    /// The response document this result was built from.
    pub fn raw_json(&self) -> &Value {
        &self.raw
    }

    /// The response document, pretty-printed.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_from_known_codes() {
        assert_eq!(ResponseKind::from_code("A"), Some(ResponseKind::Article));
        assert_eq!(ResponseKind::from_code("D"), Some(ResponseKind::Disambiguation));
        assert_eq!(ResponseKind::from_code("C"), Some(ResponseKind::Category));
        assert_eq!(ResponseKind::from_code("N"), Some(ResponseKind::Name));
        assert_eq!(ResponseKind::from_code("E"), Some(ResponseKind::Exclusive));
        assert_eq!(ResponseKind::from_code(""), Some(ResponseKind::Nothing));
        assert_eq!(ResponseKind::from_code("Z"), None);
        assert_eq!(ResponseKind::from_code("a"), None);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ResponseKind::Article.to_string(), "article");
        assert_eq!(ResponseKind::Nothing.to_string(), "nothing");
        assert_eq!(ResponseKind::Unrecognized("Q".into()).to_string(), "Q");
    }

    #[test]
    fn empty_document_parses_in_both_policies() {
        for (doc, policy) in [
            (json!({"Type": ""}), ParsePolicy::Strict),
            (json!({}), ParsePolicy::Lenient),
        ] {
            let parsed = ParsedResult::from_json(doc, policy).expect("should parse");
            assert_eq!(parsed.kind, ResponseKind::Nothing);
            assert_eq!(parsed.answer, Answer::default());
            assert_eq!(parsed.abstract_, Abstract::default());
            assert!(parsed.results.is_empty());
            assert!(parsed.related.is_empty());
            assert_eq!(parsed.results.name, "Results");
            assert_eq!(parsed.related.name, "Related Topics");
        }
    }

    #[test]
    fn strict_rejects_missing_type() {
        let err =
            ParsedResult::from_json(json!({"Answer": "x"}), ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse(_)));
        assert_eq!(err.to_string(), "malformed response: missing type code");
    }

    #[test]
    fn lenient_treats_missing_type_as_nothing() {
        let parsed = ParsedResult::from_json(json!({"Answer": "x"}), ParsePolicy::Lenient)
            .expect("lenient");
        assert_eq!(parsed.kind, ResponseKind::Nothing);
        assert_eq!(parsed.type_code(), "");
    }

    #[test]
    fn strict_rejects_unknown_code() {
        let err = ParsedResult::from_json(json!({"Type": "Z"}), ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse(_)));
        assert!(err.to_string().contains("\"Z\""));
    }

    #[test]
    fn strict_rejects_non_object() {
        let err = ParsedResult::from_json(json!([1, 2]), ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse(_)));
    }

    #[test]
    fn lenient_keeps_unknown_code() {
        let parsed =
            ParsedResult::from_json(json!({"Type": "Z"}), ParsePolicy::Lenient).expect("lenient");
        assert_eq!(parsed.kind, ResponseKind::Unrecognized("Z".into()));
        assert_eq!(parsed.type_code(), "Z");
    }

    #[test]
    fn lenient_accepts_non_object() {
        let parsed = ParsedResult::from_json(json!("oops"), ParsePolicy::Lenient).expect("lenient");
        assert!(parsed.related.is_empty());
    }

    #[test]
    fn full_document_populates_every_field() {
        let doc = json!({
            "Type": "A",
            "Answer": "42",
            "AnswerType": "calc",
            "Heading": "Rust",
            "AbstractText": "A language.",
            "Definition": "oxide",
            "Redirect": "",
            "Results": [{"Text": "Official site", "FirstURL": "https://rust-lang.org"}],
            "RelatedTopics": [
                {"Text": "Cargo"},
                {"Name": "Games", "Topics": [{"Text": "Rust (game)"}]}
            ]
        });
        let parsed = ParsedResult::from_json(doc, ParsePolicy::Strict).expect("should parse");
        assert_eq!(parsed.kind, ResponseKind::Article);
        assert_eq!(parsed.answer.answer_type, "calc");
        assert_eq!(parsed.abstract_.heading, "Rust");
        assert_eq!(parsed.definition.text, "oxide");
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.related.len(), 2);
        assert_eq!(parsed.related.items[1].topics[0].text, "Rust (game)");
    }

    #[test]
    fn from_json_str_rejects_non_json() {
        let err = ParsedResult::from_json_str("<html>", ParsePolicy::Lenient).unwrap_err();
        assert!(matches!(err, SearchError::Unexpected(_)));
    }

    #[test]
    fn keeps_raw_document() {
        let parsed =
            ParsedResult::from_json_str(r#"{"Type":"A","Answer":"x"}"#, ParsePolicy::Lenient)
                .expect("should parse");
        assert_eq!(parsed.raw_json()["Answer"], "x");
        assert!(parsed.to_pretty_json().contains("\n  \"Answer\": \"x\""));
    }
}
