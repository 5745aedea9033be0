//! Data models for Zotero items and Semantic Scholar citation metadata.
//!
//! Models use `#[serde(default)]` for optional fields,
//! `#[serde(rename_all = "camelCase")]` to match API naming, and keep
//! unknown fields in a flattened map so records pass through untouched.

mod citation;
mod enums;
mod item;

pub use citation::SupplementalMetadata;
pub use enums::{LibraryKind, ResponseFormat};
pub use item::{Creator, ItemData, ResultItem, SelectedItem};
