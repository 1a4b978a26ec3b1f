//! BuildContext port - what the planner needs from the enclosing build system
//!
//! The planner never reaches for global state. Everything it learns about
//! the outside world (which files a label names, where a tool lives) and
//! everything it asks the outside world to do (run a command) goes through
//! this trait.

use crate::domain::entities::{InputFile, Rule};
use crate::domain::value_objects::PlanSettings;

/// Result of resolving one `srcs` or `tool_files` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SrcResolution {
    /// The entry names these files (possibly none)
    Files(Vec<InputFile>),
    /// The entry references a module that does not exist
    Missing,
}

/// Result of resolving one `tools` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResolution {
    /// Workspace-relative path of the tool binary
    Found(String),
    /// The tool module exists but is disabled
    Disabled,
    /// The tool module exists but declares no output
    NoOutput,
    /// No such tool
    NotFound,
}

/// Capability handed to the planner by the build system.
pub trait BuildContext {
    /// Settings shared by all modules
    fn settings(&self) -> &PlanSettings;

    /// Resolve a source entry declared by the package at `package_dir`.
    ///
    /// `entry` is a package-relative path, a glob, or `:name`.
    fn resolve_srcs(&self, package_dir: &str, entry: &str) -> SrcResolution;

    /// Resolve a host tool by name.
    fn resolve_tool(&self, name: &str) -> ToolResolution;

    /// Declare a command execution for `module`.
    fn declare_rule(&mut self, module: &str, rule: Rule);
}
