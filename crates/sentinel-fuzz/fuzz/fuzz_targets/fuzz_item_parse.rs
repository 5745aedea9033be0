#![no_main]

use libfuzzer_sys::fuzz_target;
use zotero_scholar::models::ResultItem;

fuzz_target!(|data: &[u8]| {
    // A search response is a list of items; rendering must not panic either
    if let Ok(items) = serde_json::from_slice::<Vec<ResultItem>>(data) {
        for item in &items {
            let _ = item.title_or_default();
            let _ = item.creator_names();
        }
    }
});
