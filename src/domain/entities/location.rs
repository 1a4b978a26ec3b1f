//! Location labels - named file sets a command template can reference

use std::collections::HashMap;
use std::fmt;

use crate::domain::value_objects::Sandbox;
use crate::error::{GenError, GenResult};

/// What a label points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Host tools or tool files, copied into the sandbox's tool dir
    Tool(Vec<String>),
    /// Source files, visible at their workspace path
    Input(Vec<String>),
    /// A generated file
    Output(String),
    /// Placeholder for a dependency that couldn't be found
    Missing(String),
}

impl Location {
    /// Paths this location expands to inside `sandbox`.
    pub fn paths(&self, sandbox: &Sandbox) -> Vec<String> {
        match self {
            Location::Tool(paths) => paths.iter().map(|p| sandbox.path_for_tool(p)).collect(),
            Location::Input(paths) => paths.iter().map(|p| sandbox.path_for_input(p)).collect(),
            Location::Output(path) => vec![sandbox.path_for_output(path)],
            Location::Missing(marker) => vec![marker.clone()],
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Tool(paths) => write!(f, "tool {:?}", paths),
            Location::Input(paths) => write!(f, "input {:?}", paths),
            Location::Output(path) => write!(f, "output {:?}", path),
            Location::Missing(marker) => write!(f, "{:?}", marker),
        }
    }
}

/// Labels registered for one module, in registration order.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    labels: HashMap<String, Location>,
    first: Option<String>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `label`; a label may only be registered once.
    pub fn add(&mut self, label: impl Into<String>, location: Location) -> GenResult<()> {
        let label = label.into();
        if let Some(existing) = self.labels.get(&label) {
            return Err(GenError::DuplicateLabel {
                label,
                first: existing.to_string(),
                second: location.to_string(),
            });
        }
        if self.first.is_none() {
            self.first = Some(label.clone());
        }
        self.labels.insert(label, location);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&Location> {
        self.labels.get(label)
    }

    /// The first label registered, used by bare `$(LOCATION)`
    pub fn default_label(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
