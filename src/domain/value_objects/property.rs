//! Property value object - which part of a generation request an error belongs to

use std::fmt;

use serde::Serialize;

/// A configurable property of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Input source files
    Srcs,
    /// Output path template
    Output,
    /// Shell command template
    Cmd,
    /// Host tool references
    Tools,
    /// Inputs per shard
    ShardSize,
}

impl Property {
    /// Name as written in the manifest
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Srcs => "srcs",
            Property::Output => "output",
            Property::Cmd => "cmd",
            Property::Tools => "tools",
            Property::ShardSize => "shard_size",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a label reference used `$(LOCATION ..)` or `$(LOCATIONS ..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelForm {
    Singular,
    Plural,
}

impl fmt::Display for LabelForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelForm::Singular => f.write_str("location"),
            LabelForm::Plural => f.write_str("locations"),
        }
    }
}

/// Whether a label was named explicitly or picked as the default tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Named,
    Default,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Named => f.write_str("label"),
            LabelKind::Default => f.write_str("default label"),
        }
    }
}
