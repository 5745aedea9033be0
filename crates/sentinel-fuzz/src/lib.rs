//! Fuzzing library for zotero-scholar.
//!
//! Fuzz targets for JSON deserialization of the Zotero item listing and
//! the Semantic Scholar paper record.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_item_parse -- -max_total_time=60
//! ```

pub use zotero_scholar::models;
