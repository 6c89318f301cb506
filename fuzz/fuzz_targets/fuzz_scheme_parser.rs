#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Darf niemals paniken; gueltige Schemata muessen die Invarianten erfuellen.
        if let Ok(scheme) = transit_scheme_editor::parse_scheme(text) {
            assert!(scheme.check_invariants().is_ok());
        }
    }
});
