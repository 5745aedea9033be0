//! Zotero item model.
//!
//! Only `key`, `data.title` and `data.creators[].lastName` are read by the
//! controller and the view. Everything else is carried along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SupplementalMetadata;

/// One record returned by a Zotero item search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Unique item key within the library (e.g., "ABCD2345").
    #[serde(default)]
    pub key: String,

    /// Item fields.
    #[serde(default)]
    pub data: ItemData,

    /// Remaining top-level fields (`version`, `library`, `links`, `meta`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResultItem {
    /// Build a bare item, mostly useful in tests and fixtures.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>, surnames: &[&str]) -> Self {
        Self {
            key: key.into(),
            data: ItemData {
                title: Some(title.into()),
                creators: surnames.iter().map(|s| Creator::with_last_name(*s)).collect(),
                ..ItemData::default()
            },
            extra: Map::new(),
        }
    }

    /// Get the item title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.data.title.as_deref().unwrap_or("Untitled")
    }

    /// Creator surnames in record order.
    #[must_use]
    pub fn surnames(&self) -> Vec<&str> {
        self.data.creators.iter().map(Creator::surname).collect()
    }

    /// Creator surnames as a comma-separated string.
    #[must_use]
    pub fn creator_names(&self) -> String {
        self.surnames().join(", ")
    }
}

/// The `data` object of a Zotero item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    /// Item type (e.g., "journalArticle", "book").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    /// Item title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Authors, editors and other contributors.
    #[serde(default)]
    pub creators: Vec<Creator>,

    /// Other item fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A contributor to a Zotero item.
///
/// Zotero uses either the two-field form (`firstName` + `lastName`) or the
/// single-field form (`name`) for institutions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Role (e.g., "author", "editor").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_type: Option<String>,

    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Surname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Single-field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Other creator fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Creator {
    /// A creator known only by surname.
    #[must_use]
    pub fn with_last_name(last_name: impl Into<String>) -> Self {
        Self { last_name: Some(last_name.into()), ..Self::default() }
    }

    /// Surname, then single-field name, then empty.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.last_name.as_deref().or(self.name.as_deref()).unwrap_or("")
    }
}

/// The item shown in the detail panel.
///
/// Serializes like the Zotero record with an extra `semanticData` object once
/// citation metadata has arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem {
    /// The record as returned by the search.
    #[serde(flatten)]
    pub item: ResultItem,

    /// Citation metadata, present after a successful lookup.
    #[serde(rename = "semanticData", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SupplementalMetadata>,
}

impl SelectedItem {
    /// A selection without metadata.
    #[must_use]
    pub const fn new(item: ResultItem) -> Self {
        Self { item, metadata: None }
    }

    /// Merge citation metadata into the selection.
    #[must_use]
    pub fn with_metadata(self, metadata: SupplementalMetadata) -> Self {
        Self { item: self.item, metadata: Some(metadata) }
    }

    /// Key of the selected item.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.item.key
    }

    /// Check whether citation metadata has been merged in.
    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        self.metadata.is_some()
    }
}
