//! Output template value object
//!
//! A parsed output-path template. Parsing resolves every placeholder to a
//! [`Selector`] up front, so a bad token is reported once, before any
//! input is expanded.

use std::fmt;

use crate::domain::entities::InputFile;
use crate::domain::value_objects::template::{Segment, Template};
use crate::domain::value_objects::{Property, Selector};
use crate::error::{GenError, GenResult};

/// One piece of an output template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPart {
    Literal(String),
    Select(Selector),
}

/// A validated output path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    source: String,
    parts: Vec<OutputPart>,
}

impl OutputTemplate {
    /// Template used when none is configured
    pub const DEFAULT: &'static str = "$(SRC)";

    /// Parse and validate a template string.
    pub fn parse(source: &str) -> GenResult<Self> {
        let template = Template::parse(source, Property::Output)?;
        let mut parts = Vec::with_capacity(template.segments().len());
        for segment in template.segments() {
            let part = match segment {
                Segment::Literal(text) => OutputPart::Literal(text.clone()),
                Segment::Dollar => OutputPart::Literal("$".to_string()),
                Segment::Var(name) => match Selector::from_name(name) {
                    Some(selector) => OutputPart::Select(selector),
                    None => {
                        return Err(GenError::UnknownPlaceholder {
                            property: Property::Output,
                            token: name.clone(),
                        })
                    }
                },
            };
            parts.push(part);
        }
        Ok(Self {
            source: source.to_string(),
            parts,
        })
    }

    /// Legacy naming: `prefix + $(SRC:BASE) + suffix`.
    pub fn legacy(prefix: &str, suffix: &str) -> Self {
        let mut parts = Vec::with_capacity(3);
        if !prefix.is_empty() {
            parts.push(OutputPart::Literal(prefix.to_string()));
        }
        parts.push(OutputPart::Select(Selector::Base));
        if !suffix.is_empty() {
            parts.push(OutputPart::Literal(suffix.to_string()));
        }
        Self {
            source: format!("{}$(SRC:BASE){}", prefix.replace('$', "$$"), suffix.replace('$', "$$")),
            parts,
        }
    }

    /// The template as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed parts in order
    pub fn parts(&self) -> &[OutputPart] {
        &self.parts
    }

    /// Whether every input maps to the same output
    pub fn is_constant(&self) -> bool {
        self.parts
            .iter()
            .all(|p| matches!(p, OutputPart::Literal(_)))
    }

    /// Expand this template for one input.
    pub fn expand(&self, input: &InputFile) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                OutputPart::Literal(text) => out.push_str(text),
                OutputPart::Select(selector) => out.push_str(&selector.apply(input)),
            }
        }
        out
    }
}

impl Default for OutputTemplate {
    fn default() -> Self {
        Self {
            source: Self::DEFAULT.to_string(),
            parts: vec![OutputPart::Select(Selector::Bare)],
        }
    }
}

impl fmt::Display for OutputTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
