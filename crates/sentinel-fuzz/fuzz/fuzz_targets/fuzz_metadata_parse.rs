#![no_main]

use libfuzzer_sys::fuzz_target;
use zotero_scholar::models::SupplementalMetadata;

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return Ok or Err
    if let Ok(meta) = serde_json::from_slice::<SupplementalMetadata>(data) {
        let _ = meta.citations_display();
        let _ = meta.influential_display();
    }
});
