//! Command template variables
//!
//! Variable names understood inside `cmd`. The uppercase spellings are
//! canonical; the lowercase genrule spellings (`in`, `out`, `genDir`,
//! `location`, `locations`) are accepted as aliases.

use crate::domain::value_objects::LabelForm;

/// A recognized `cmd` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandVar<'a> {
    /// `$(SRC)` / `$(IN)`
    Inputs,
    /// `$(OUT)`
    Outputs,
    /// `$(OUT_DIR)`
    OutDir,
    /// `$(LOCATION [label])` / `$(LOCATIONS [label])`
    Location {
        label: Option<&'a str>,
        form: LabelForm,
    },
}

impl<'a> CommandVar<'a> {
    /// Classify a variable name, or `None` if it is not a `cmd` variable.
    pub fn parse(name: &'a str) -> Option<Self> {
        let (head, arg) = match name.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, Some(rest.trim())),
            None => (name, None),
        };
        match (head, arg) {
            ("SRC" | "IN" | "in", None) => Some(CommandVar::Inputs),
            ("OUT" | "out", None) => Some(CommandVar::Outputs),
            ("OUT_DIR" | "genDir", None) => Some(CommandVar::OutDir),
            ("LOCATION" | "location", label) => Some(CommandVar::Location {
                label,
                form: LabelForm::Singular,
            }),
            ("LOCATIONS" | "locations", label) => Some(CommandVar::Location {
                label,
                form: LabelForm::Plural,
            }),
            _ => None,
        }
    }

    /// Whether the variable is filled in per input before tasks are joined
    pub fn is_per_input(&self) -> bool {
        matches!(self, CommandVar::Inputs | CommandVar::Outputs)
    }
}
