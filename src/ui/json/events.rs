//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use genshard::config::ConfigWarning;
use genshard::domain::entities::{ModulePlan, Rule};
use genshard::domain::value_objects::Property;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            modules: None,
            rules: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            success: false,
            ..Self::success(command)
        }
    }

    pub fn with_counts(mut self, modules: usize, rules: usize) -> Self {
        self.modules = Some(modules);
        self.rules = Some(rules);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Property>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
            property: None,
        }
    }

    pub fn with_property(mut self, property: Option<Property>) -> Self {
        self.property = property;
        self
    }
}

/// Unknown manifest key
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub file: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&ConfigWarning> for WarningEvent {
    fn from(warning: &ConfigWarning) -> Self {
        Self {
            event: "warning",
            file: warning.file.display().to_string(),
            key: warning.key.clone(),
            line: warning.line,
            suggestion: warning.suggestion.clone(),
        }
    }
}

/// One declared rule, with the module that declared it.
#[derive(Debug, Clone, Serialize)]
pub struct RuleEvent<'a> {
    pub event: &'static str,
    pub module: &'a str,
    #[serde(flatten)]
    pub rule: &'a Rule,
}

impl<'a> RuleEvent<'a> {
    pub fn new(module: &'a str, rule: &'a Rule) -> Self {
        Self {
            event: "rule",
            module,
            rule,
        }
    }
}

/// What a module exposes to dependents, emitted after its rules.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleEvent<'a> {
    pub event: &'static str,
    pub module: &'a str,
    pub shards: usize,
    pub output_files: &'a [String],
    pub output_deps: &'a [String],
    pub exported_include_dirs: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    pub missing_dependencies: &'a [String],
}

impl<'a> From<&'a ModulePlan> for ModuleEvent<'a> {
    fn from(plan: &'a ModulePlan) -> Self {
        Self {
            event: "module",
            module: &plan.name,
            shards: plan.shard_count(),
            output_files: &plan.output_files,
            output_deps: &plan.output_deps,
            exported_include_dirs: &plan.exported_include_dirs,
            missing_dependencies: &plan.missing_dependencies,
        }
    }
}

/// One input expanded through an output template.
#[derive(Debug, Clone, Serialize)]
pub struct ExpansionEvent<'a> {
    pub event: &'static str,
    pub input: &'a str,
    pub output: &'a str,
}

impl<'a> ExpansionEvent<'a> {
    pub fn new(input: &'a str, output: &'a str) -> Self {
        Self {
            event: "expansion",
            input,
            output,
        }
    }
}

fn is_empty(items: &&[String]) -> bool {
    items.is_empty()
}
