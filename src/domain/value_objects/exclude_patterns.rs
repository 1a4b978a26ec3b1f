//! Exclude patterns value object
//!
//! Matches `exclude_srcs` entries against package-relative input paths using
//! gitignore semantics.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{GenError, GenResult};

/// Compiled `exclude_srcs` patterns for one package.
#[derive(Debug)]
pub struct ExcludePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl ExcludePatterns {
    /// A pattern set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile patterns relative to the package root.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> GenResult<Self> {
        if patterns.is_empty() {
            return Ok(Self::empty());
        }

        let mut builder = GitignoreBuilder::new("");
        for pattern in patterns {
            builder
                .add_line(None, pattern.as_ref())
                .map_err(|e| GenError::InvalidExcludePattern {
                    pattern: pattern.as_ref().to_string(),
                    message: e.to_string(),
                })?;
        }
        let matcher = builder
            .build()
            .map_err(|e| GenError::InvalidExcludePattern {
                pattern: patterns
                    .iter()
                    .map(|p| p.as_ref())
                    .collect::<Vec<_>>()
                    .join(", "),
                message: e.to_string(),
            })?;

        Ok(Self {
            matcher,
            pattern_count: patterns.len(),
        })
    }

    /// Whether the package-relative `rel_path` is excluded.
    pub fn is_excluded(&self, rel_path: &str) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(Path::new(rel_path), false)
            .is_ignore()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::empty()
    }
}
