#![no_main]
use libfuzzer_sys::fuzz_target;
use propscrub::scrub_str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(Some(scrubbed)) = scrub_str(s) {
            // scrubbed output must parse and must not need another pass
            assert!(matches!(scrub_str(&scrubbed), Ok(None)));
        }
    }
});
