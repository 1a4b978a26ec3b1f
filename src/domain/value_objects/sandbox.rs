//! Sandbox path mapping
//!
//! Generated commands run inside a sandbox that mirrors the workspace.
//! Inputs keep their workspace-relative paths; outputs and tools are
//! re-rooted under a placeholder directory that the executor substitutes.

use crate::domain::value_objects::path;

/// Placeholder the executor replaces with the real sandbox directory
pub const SANDBOX_DIR: &str = "__SBOX_SANDBOX_DIR__";

/// Maps workspace paths to their location inside one task's sandbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sandbox {
    gen_dir: String,
}

impl Sandbox {
    /// Sandbox whose output root is `gen_dir`.
    pub fn new(gen_dir: impl Into<String>) -> Self {
        Self {
            gen_dir: gen_dir.into(),
        }
    }

    /// Inputs are copied in at their workspace-relative path.
    pub fn path_for_input(&self, input: &str) -> String {
        input.to_string()
    }

    /// Output root inside the sandbox (`$(OUT_DIR)`).
    pub fn out_dir(&self) -> String {
        path::join([SANDBOX_DIR, "out"])
    }

    /// Where `output` is written inside the sandbox.
    ///
    /// `output` must lie under the gen dir; anything else is mapped by its
    /// full path so it still lands inside the sandbox.
    pub fn path_for_output(&self, output: &str) -> String {
        let rel = path::rel_to(output, &self.gen_dir).unwrap_or(output);
        path::join([SANDBOX_DIR, "out", rel])
    }

    /// Where a tool is copied inside the sandbox.
    pub fn path_for_tool(&self, tool: &str) -> String {
        path::join([SANDBOX_DIR, "tools", "src", tool])
    }
}
