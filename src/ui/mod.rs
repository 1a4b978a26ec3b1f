//! Terminal output for the genshard binary
//!
//! - `json` - NDJSON events for `--json`
//! - `views` - Human-readable text per command

pub mod json;
pub mod views;
