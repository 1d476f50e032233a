#![no_main]

use libfuzzer_sys::fuzz_target;
use quest_map_editor::store::firestore::codec::decode_document;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = decode_document(&value);
    }
});
