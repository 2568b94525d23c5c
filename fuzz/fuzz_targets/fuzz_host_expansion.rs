#![no_main]

use invgen_core::{find_pattern, resolve_host, HostDeclaration};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };
    // Keep the cross product bounded.
    if name.len() > 64
        || name.matches('-').count() > 2
        || name
            .split(|c: char| !c.is_ascii_digit())
            .any(|run| run.len() > 2)
    {
        return;
    }
    if let Ok(records) = resolve_host(&HostDeclaration::new(name)) {
        for record in records {
            assert!(find_pattern(&record.host).is_none());
        }
    }
});
