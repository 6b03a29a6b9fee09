#![no_main]
use libfuzzer_sys::fuzz_target;
use texcycle_log::first_match_in;
use texcycle_log::signals::{MISSING_BBL, RERUN};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, including invalid UTF-8 and bare `\r`, must scan cleanly.
    let _ = first_match_in(data, &MISSING_BBL).expect("in-memory read cannot fail");

    if let Some(line) = first_match_in(data, &RERUN).expect("in-memory read cannot fail") {
        assert!(!line.contains('\n'));
    }
});
