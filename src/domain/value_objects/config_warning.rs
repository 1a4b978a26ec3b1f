//! Configuration warning value object

use std::fmt;
use std::path::PathBuf;

/// A manifest key genshard didn't recognize.
///
/// Unknown keys never fail loading; they are reported so typos like
/// `shard_sise` don't silently fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key, e.g. `codegen.0.outptu`
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line, when the key could be located in the source
    pub line: Option<usize>,
    /// Closest known key, if one is near enough
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        write!(f, ": unknown key '{}'", self.key)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
