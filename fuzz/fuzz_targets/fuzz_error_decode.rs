#![no_main]

use libfuzzer_sys::fuzz_target;
use quest_map_editor::store::firestore::codec::decode_error;

fuzz_target!(|data: (u16, &str)| {
    let (status, body) = data;
    let _ = decode_error(status, body);
});
