#![no_main]

use std::path::Path;

use genshard::config::{parse_with_warnings, Manifest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz manifest parsing and defaults resolution - this should never panic
        if let Ok((manifest, _warnings)) =
            parse_with_warnings::<Manifest>(content, Path::new("genshard.toml"))
        {
            let _ = manifest.requests();
        }
    }
});
