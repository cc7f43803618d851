//! Fuzz harness for skipmap configuration files
//!
//! Any text must either fail to parse or yield a config that validates and
//! builds a map.

#![no_main]

use libfuzzer_sys::fuzz_target;
use skipmap_config::{ConfigFormat, parse_config};
use skipmap_engine::SkipMap;
use skipmap_order::Natural;

fuzz_target!(|data: &[u8]| {
    // Ensure the input is valid UTF-8
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    for format in [ConfigFormat::Json, ConfigFormat::Yaml] {
        if let Ok(config) = parse_config(input, format) {
            assert!(config.validate().is_ok());
            let built: Result<SkipMap<u8, ()>, _> = SkipMap::with_config(Natural, &config);
            assert!(built.is_ok());
        }
    }
});
