//! CodegenRequest entity - one declared generation module
//!
//! The full configuration surface the planner reads for a module. Built
//! fresh from the manifest on every invocation.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{OutputTemplate, ShardSize};
use crate::error::GenResult;

/// A generation request as declared in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenRequest {
    /// Module name, unique within the manifest
    pub name: String,

    /// Directory of the package declaring the module
    #[serde(default)]
    pub package_dir: String,

    /// Source files, globs, or `:filegroup` references
    #[serde(default)]
    pub srcs: Vec<String>,

    /// Patterns removed from the resolved sources
    #[serde(default)]
    pub exclude_srcs: Vec<String>,

    /// Host tool names
    #[serde(default)]
    pub tools: Vec<String>,

    /// Scripts or data files used by the command
    #[serde(default)]
    pub tool_files: Vec<String>,

    /// Output path template; `$(SRC)` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Deprecated: prepended to `$(SRC:BASE)` when `output` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Deprecated: appended to `$(SRC:BASE)` when `output` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    /// Shell command template run once per input
    pub cmd: String,

    /// Inputs per shard, overriding the workspace default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_size: Option<usize>,

    /// Directories under the output dir exported as include paths
    #[serde(default)]
    pub export_include_dirs: Vec<String>,
}

impl CodegenRequest {
    /// A request with just a name and command; fill the rest with struct update.
    pub fn new(name: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cmd: cmd.into(),
            ..Self::default()
        }
    }

    /// Resolve the output naming rule, honouring legacy prefix/suffix.
    pub fn output_template(&self) -> GenResult<OutputTemplate> {
        match (&self.output, &self.prefix, &self.suffix) {
            (Some(template), _, _) if !template.is_empty() => OutputTemplate::parse(template),
            (_, None, None) => Ok(OutputTemplate::default()),
            (_, prefix, suffix) => Ok(OutputTemplate::legacy(
                prefix.as_deref().unwrap_or(""),
                suffix.as_deref().unwrap_or(""),
            )),
        }
    }

    /// Shard size for this module, falling back to `default`.
    pub fn effective_shard_size(&self, default: ShardSize) -> GenResult<ShardSize> {
        match self.shard_size {
            Some(size) => ShardSize::new(size),
            None => Ok(default),
        }
    }
}
