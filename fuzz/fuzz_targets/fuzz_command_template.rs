#![no_main]

use genshard::domain::value_objects::{Property, Template};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Ok(template) = Template::parse(source, Property::Cmd) {
            // A partial expansion must itself parse for the second pass
            let partial = template.expand_partial(|_| None);
            assert!(Template::parse(&partial, Property::Cmd).is_ok());
        }
    }
});
