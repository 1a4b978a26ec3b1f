//! ModulePlan entity - everything planned for one generation request

use serde::Serialize;

use crate::domain::entities::{GenerationTask, MergePlan, Rule, RuleKind};

/// Outputs of planning one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModulePlan {
    pub name: String,
    /// Tasks in shard order
    pub tasks: Vec<GenerationTask>,
    /// Merge step, present only when sharded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergePlan>,
    /// Rules declared for the build system, in declaration order
    pub rules: Vec<Rule>,
    /// Final generated files, in input order
    pub output_files: Vec<String>,
    /// Include directories exported to dependents
    pub exported_include_dirs: Vec<String>,
    /// What dependents should depend on
    pub output_deps: Vec<String>,
    /// Dependencies that were missing under permissive mode
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_dependencies: Vec<String>,
}

impl ModulePlan {
    /// Fully expanded command of each generate rule
    pub fn commands(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|r| r.kind == RuleKind::Generate)
            .map(|r| r.command.as_str())
            .collect()
    }

    pub fn shard_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether this module's rules were replaced by failing ones
    pub fn is_error(&self) -> bool {
        !self.missing_dependencies.is_empty()
    }
}
