//! Error types for genshard
//!
//! Every planning failure is a configuration error attributable to one
//! property of the generation request (`srcs`, `output`, `cmd`, `tools`).
//! All of them are raised while tasks are being built, never while a
//! command runs.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::path::PathEscape;
use crate::domain::value_objects::{LabelForm, LabelKind, Property};

/// Result type alias for genshard operations
pub type GenResult<T> = Result<T, GenError>;

/// Main error type for genshard operations
#[derive(Error, Debug)]
pub enum GenError {
    /// Zero source files remain after exclusions
    #[error("srcs: must have at least one source file")]
    EmptyInput,

    /// A template referenced a variable it does not understand
    #[error("{property}: unknown variable '$({token})'")]
    UnknownPlaceholder { property: Property, token: String },

    /// Malformed `$` syntax inside a template
    #[error("{property}: {message}")]
    TemplateSyntax { property: Property, message: String },

    /// Two inputs expand to the same output path
    #[error("output: generation conflict: both '{first}' and '{second}' generate '{output}'")]
    OutputCollision {
        first: String,
        second: String,
        output: String,
    },

    /// An expanded output path would not stay inside the output directory
    #[error("output: '{input}' generates '{output}': {reason}")]
    InvalidOutputPath {
        input: String,
        output: String,
        reason: PathEscape,
    },

    /// An `exclude_srcs` entry is not a valid pattern
    #[error("srcs: invalid exclude pattern '{pattern}': {message}")]
    InvalidExcludePattern { pattern: String, message: String },

    /// `$(LOCATION <label>)` or `$(LOCATIONS <label>)` named nothing we know
    #[error("cmd: unknown {form} label \"{label}\" is not in srcs, out, tools or tool_files.")]
    UnresolvedLabel { label: String, form: LabelForm },

    /// Singular reference to a label with more than one file
    #[error("cmd: {kind} \"{label}\" has multiple files, use $(LOCATIONS {label}) to reference it")]
    AmbiguousLabel { label: String, kind: LabelKind },

    /// Label resolved, but to zero files
    #[error("cmd: {kind} \"{label}\" has no files")]
    EmptyLabel { label: String, kind: LabelKind },

    /// Bare `$(LOCATION)` with no tools declared
    #[error("cmd: at least one `tools` or `tool_files` is required if $(LOCATION) is used")]
    NoDefaultTool,

    /// The same label was registered twice
    #[error("srcs: multiple locations for label \"{label}\": {first} and {second} (do you have duplicate srcs entries?)")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },

    /// A referenced module could not be found
    #[error("{property}: missing dependency \"{name}\"")]
    MissingDependency { property: Property, name: String },

    /// A referenced tool exists but is disabled
    #[error("tools: depends on disabled module \"{name}\"")]
    DisabledDependency { name: String },

    /// A host tool was declared without an output path
    #[error("tools: host tool \"{name}\" missing output file")]
    ToolMissingOutput { name: String },

    /// A task was built with no outputs
    #[error("output: must have at least one output file")]
    NoOutputs,

    /// Shard size must be positive
    #[error("shard_size: must be at least 1, got {0}")]
    InvalidShardSize(usize),

    /// A planning error scoped to one module
    #[error("module \"{module}\": {source}")]
    Module {
        module: String,
        #[source]
        source: Box<GenError>,
    },

    /// Manifest or user config could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Manifest file does not exist
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Scope this error to the named module.
    pub fn in_module(self, module: impl Into<String>) -> Self {
        match self {
            GenError::Module { .. } => self,
            other => GenError::Module {
                module: module.into(),
                source: Box::new(other),
            },
        }
    }

    /// The property this error is attributed to, if any.
    pub fn property(&self) -> Option<Property> {
        match self {
            GenError::EmptyInput
            | GenError::InvalidExcludePattern { .. }
            | GenError::DuplicateLabel { .. } => Some(Property::Srcs),
            GenError::UnknownPlaceholder { property, .. }
            | GenError::TemplateSyntax { property, .. }
            | GenError::MissingDependency { property, .. } => Some(*property),
            GenError::OutputCollision { .. }
            | GenError::InvalidOutputPath { .. }
            | GenError::NoOutputs => Some(Property::Output),
            GenError::UnresolvedLabel { .. }
            | GenError::AmbiguousLabel { .. }
            | GenError::EmptyLabel { .. }
            | GenError::NoDefaultTool => Some(Property::Cmd),
            GenError::DisabledDependency { .. } | GenError::ToolMissingOutput { .. } => {
                Some(Property::Tools)
            }
            GenError::InvalidShardSize(_) => Some(Property::ShardSize),
            GenError::Module { source, .. } => source.property(),
            _ => None,
        }
    }
}
