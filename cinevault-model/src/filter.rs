use serde::{Deserialize, Serialize};

/// Literal `type` value that disables the type predicate on list queries.
pub const TYPE_WILDCARD: &str = "all";

/// Conjunctive list-query predicates. Every supplied field must match;
/// `search` alone fans out as an OR across title, description and tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFilter {
    /// Equality on the record type, skipped when the value is `all`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Exact, case-sensitive category match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Exact language match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Case-insensitive substring over title OR description OR any tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ContentFilter {
    /// The effective type predicate, with the `all` wildcard stripped.
    pub fn effective_type(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .filter(|t| *t != TYPE_WILDCARD)
    }
}
