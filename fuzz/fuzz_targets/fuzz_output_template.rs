#![no_main]

use genshard::{InputFile, OutputTemplate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Parsing and expanding output templates should never panic
        if let Ok(template) = OutputTemplate::parse(source) {
            for input in [
                InputFile::new("", "a.xml"),
                InputFile::new("pkg", "dir/.hidden"),
                InputFile::new("pkg/sub", "x.tar.gz"),
                InputFile::without_package("noext"),
            ] {
                let _ = template.expand(&input);
            }
        }
    }
});
