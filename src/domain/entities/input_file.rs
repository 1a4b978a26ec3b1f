//! InputFile entity - one source file handed to the generator
//!
//! Carries the owning package directory as optional metadata. When no
//! owning package is known (for example, the file is itself a generated
//! artifact) the raw path stands in for the package-relative path.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::path;

/// A source file, decomposed into its owning package and relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InputFile {
    /// Directory of the build unit that declared the file
    package_dir: Option<String>,
    /// Path relative to `package_dir`, or the raw path when there is none
    rel: String,
}

impl InputFile {
    /// A file declared by the package at `package_dir`.
    ///
    /// An empty `package_dir` is the workspace root package.
    pub fn new(package_dir: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            package_dir: Some(package_dir.into().trim_matches('/').to_string()),
            rel: rel.into().trim_start_matches('/').to_string(),
        }
    }

    /// A file with no known owning package.
    pub fn without_package(path: impl Into<String>) -> Self {
        Self {
            package_dir: None,
            rel: path.into().trim_start_matches('/').to_string(),
        }
    }

    /// Owning package directory, if known
    pub fn package_dir(&self) -> Option<&str> {
        self.package_dir.as_deref()
    }

    /// Path relative to the owning package (`PATH/BASE.EXT`)
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// Workspace-relative path (`PKG/PATH/BASE.EXT`)
    pub fn path(&self) -> String {
        match &self.package_dir {
            Some(pkg) => path::join([pkg.as_str(), self.rel.as_str()]),
            None => self.rel.clone(),
        }
    }

    /// Final component with extension (`BASE.EXT`)
    pub fn base(&self) -> &str {
        path::base(&self.rel)
    }
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
