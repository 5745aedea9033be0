#![no_main]

use libfuzzer_sys::fuzz_target;
use zotero_scholar::models::{Creator, ResultItem, SelectedItem, SupplementalMetadata};

fuzz_target!(|data: &[u8]| {
    // First try to parse as valid JSON
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        // Then try each model type
        let _ = serde_json::from_value::<ResultItem>(json.clone());
        let _ = serde_json::from_value::<Creator>(json.clone());
        let _ = serde_json::from_value::<SupplementalMetadata>(json.clone());
        let _ = serde_json::from_value::<SelectedItem>(json);
    }
});
