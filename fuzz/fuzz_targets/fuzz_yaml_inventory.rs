#![no_main]

use invgen_core::{build_from_configs, RawConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 || text.contains('-') {
        return;
    }
    if let Ok(config) = serde_yaml::from_str::<RawConfig>(text) {
        let _ = build_from_configs(vec![config]);
    }
});
