//! Rule entity - a declared command execution
//!
//! Rules are what the planner hands to the build system: an opaque command
//! plus the files it reads and writes. The build system decides when and
//! where they run.

use serde::Serialize;

use crate::domain::value_objects::shell_escape;

/// What a rule is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Runs the generator for one task
    Generate,
    /// Recombines sharded outputs into the final directory
    Merge,
    /// Groups many outputs behind one file
    Phony,
    /// Stands in for a rule that can't run because dependencies are missing
    Error,
}

/// Sandbox a generate rule runs in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SandboxSpec {
    /// Directory the sandbox's `out/` maps to
    pub gen_dir: String,
    /// Where the sandbox manifest is written
    pub manifest: String,
}

/// A response file passed to the command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RspFile {
    pub path: String,
    pub content: String,
}

/// One command execution declared to the build system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub kind: RuleKind,
    pub command: String,
    pub inputs: Vec<String>,
    pub tools: Vec<String>,
    pub outputs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<SandboxSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rspfile: Option<RspFile>,
}

impl Rule {
    /// A phony rule making `output` depend on `inputs`.
    pub fn phony(output: impl Into<String>, inputs: Vec<String>) -> Self {
        Self {
            name: "phony".to_string(),
            description: String::new(),
            kind: RuleKind::Phony,
            command: String::new(),
            inputs,
            tools: Vec::new(),
            outputs: vec![output.into()],
            sandbox: None,
            rspfile: None,
        }
    }

    /// A rule with no outputs that only reports `missing` and fails.
    pub fn error(name: impl Into<String>, module: &str, missing: &[String]) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind: RuleKind::Generate,
            command: String::new(),
            inputs: Vec::new(),
            tools: Vec::new(),
            outputs: Vec::new(),
            sandbox: None,
            rspfile: None,
        }
        .into_error(module, missing)
    }

    /// Replace this rule with one that reports `missing` and fails.
    ///
    /// Outputs are kept so dependents still see the files declared; the
    /// command never produces them.
    pub fn into_error(self, module: &str, missing: &[String]) -> Self {
        let message = format!(
            "module \"{}\" missing dependencies: {}",
            module,
            missing.join(", ")
        );
        Self {
            name: self.name,
            description: format!("{} (missing dependencies)", self.description)
                .trim_start()
                .to_string(),
            kind: RuleKind::Error,
            command: format!("echo {} >&2 && false", shell_escape(&message)),
            inputs: Vec::new(),
            tools: Vec::new(),
            outputs: self.outputs,
            sandbox: None,
            rspfile: None,
        }
    }
}
