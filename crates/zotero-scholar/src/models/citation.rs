//! Citation metadata from the Semantic Scholar v1 paper endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Citation statistics merged into a selected item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementalMetadata {
    /// Number of citations this paper has received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i64>,

    /// Influential citation count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influential_citation_count: Option<i64>,

    /// Paper title as known to Semantic Scholar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Publication venue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    /// Semantic Scholar page for the paper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Remaining response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SupplementalMetadata {
    /// Metadata carrying only the two counts.
    #[must_use]
    pub fn with_counts(citations: i64, influential: i64) -> Self {
        Self {
            citation_count: Some(citations),
            influential_citation_count: Some(influential),
            ..Self::default()
        }
    }

    /// Citation count for display; empty when the service omitted it.
    #[must_use]
    pub fn citations_display(&self) -> String {
        self.citation_count.map(|c| c.to_string()).unwrap_or_default()
    }

    /// Influential citation count for display; empty when the service omitted it.
    #[must_use]
    pub fn influential_display(&self) -> String {
        self.influential_citation_count.map(|c| c.to_string()).unwrap_or_default()
    }
}
