//! Task-level command expansion
//!
//! Resolves the variables [`TaskBuilder`] left in a task command: location
//! labels, `$(OUT_DIR)`, and `$$`. Every value lands inside the single-quoted
//! argument of a `bash -c` wrapper, so it is escaped for the inner shell and
//! then spliced into the quoted string.
//!
//! [`TaskBuilder`]: super::TaskBuilder

use crate::domain::entities::{GenerationTask, LocationTable};
use crate::domain::value_objects::{
    shell_escape, shell_escape_join, CommandVar, LabelForm, LabelKind, Property, Sandbox, Template,
};
use crate::error::{GenError, GenResult};

/// Expands task commands against a module's location labels.
#[derive(Debug)]
pub struct CommandExpander<'a> {
    locations: &'a LocationTable,
    has_tools: bool,
}

impl<'a> CommandExpander<'a> {
    /// `has_tools` is whether the module declares any `tools` or `tool_files`.
    pub fn new(locations: &'a LocationTable, has_tools: bool) -> Self {
        Self {
            locations,
            has_tools,
        }
    }

    /// Fully expand `task.cmd`.
    pub fn expand(&self, task: &GenerationTask) -> GenResult<String> {
        let sandbox = Sandbox::new(task.gen_dir.as_str());
        let template = Template::parse(&task.cmd, Property::Cmd)?;
        template.expand(|name| {
            let value = self.resolve(name, task, &sandbox)?;
            Ok(splice_into_quotes(&value))
        })
    }

    fn resolve(&self, name: &str, task: &GenerationTask, sandbox: &Sandbox) -> GenResult<String> {
        match CommandVar::parse(name) {
            Some(CommandVar::Inputs) => Ok(shell_escape_join(
                task.inputs
                    .iter()
                    .map(|input| sandbox.path_for_input(&input.path())),
            )),
            Some(CommandVar::Outputs) => Ok(shell_escape_join(
                task.outputs.iter().map(|out| sandbox.path_for_output(out)),
            )),
            Some(CommandVar::OutDir) => Ok(shell_escape(&sandbox.out_dir())),
            Some(CommandVar::Location { label, form }) => self.location(label, form, sandbox),
            None => Err(GenError::UnknownPlaceholder {
                property: Property::Cmd,
                token: name.to_string(),
            }),
        }
    }

    fn location(&self, label: Option<&str>, form: LabelForm, sandbox: &Sandbox) -> GenResult<String> {
        let (label, kind) = match label {
            Some(label) => (label, LabelKind::Named),
            None if self.has_tools => (
                self.locations
                    .default_label()
                    .ok_or(GenError::NoDefaultTool)?,
                LabelKind::Default,
            ),
            None => return Err(GenError::NoDefaultTool),
        };

        let location = self
            .locations
            .get(label)
            .ok_or_else(|| GenError::UnresolvedLabel {
                label: label.to_string(),
                form,
            })?;
        let paths = location.paths(sandbox);

        match (form, paths.as_slice()) {
            (_, []) => Err(GenError::EmptyLabel {
                label: label.to_string(),
                kind,
            }),
            (LabelForm::Singular, [only]) => Ok(shell_escape(only)),
            (LabelForm::Singular, _) => Err(GenError::AmbiguousLabel {
                label: label.to_string(),
                kind,
            }),
            (LabelForm::Plural, all) => Ok(shell_escape_join(all)),
        }
    }
}

/// Make `value` safe to place inside a single-quoted shell string.
fn splice_into_quotes(value: &str) -> String {
    value.replace('\'', "'\\''")
}
