//! `$`-syntax template tokenizer
//!
//! Shared by output templates and command templates. A template is a
//! sequence of literal text, `$$` escapes and `$(name)` variables.

use crate::domain::value_objects::Property;
use crate::error::{GenError, GenResult};

/// One piece of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied through unchanged
    Literal(String),
    /// `$$`, a literal dollar sign
    Dollar,
    /// `$(name)`, with surrounding whitespace trimmed from `name`
    Var(String),
}

/// A tokenized template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Tokenize `source`, attributing syntax errors to `property`.
    pub fn parse(source: &str, property: Property) -> GenResult<Self> {
        let syntax = |message: String| GenError::TemplateSyntax { property, message };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find('$') {
            literal.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let mut chars = after.chars();
            match chars.next() {
                None => return Err(syntax("expected character after '$'".to_string())),
                Some('$') => {
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Dollar);
                    rest = &after[1..];
                }
                Some('(') => {
                    let close = after
                        .find(')')
                        .ok_or_else(|| syntax("missing )".to_string()))?;
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Var(after[1..close].trim().to_string()));
                    rest = &after[close + 1..];
                }
                Some(c) => {
                    let word: String = after.split(char::is_whitespace).next().unwrap_or("").to_string();
                    if c.is_whitespace() {
                        return Err(syntax(format!("unexpected character '{}' after '$'", c)));
                    }
                    return Err(syntax(format!(
                        "expected '(' after '$', did you mean $({})?",
                        word
                    )));
                }
            }
        }
        literal.push_str(rest);
        flush(&mut literal, &mut segments);

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The original template text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tokenized segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitute every variable through `lookup`; `$$` becomes `$`.
    pub fn expand<F>(&self, mut lookup: F) -> GenResult<String>
    where
        F: FnMut(&str) -> GenResult<String>,
    {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Dollar => out.push('$'),
                Segment::Var(name) => out.push_str(&lookup(name)?),
            }
        }
        Ok(out)
    }

    /// Substitute only the variables `lookup` answers for.
    ///
    /// Unanswered variables are written back as `$(name)` and `$$` stays
    /// `$$`, so the result is itself a valid template for a later pass.
    pub fn expand_partial<F>(&self, mut lookup: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Dollar => out.push_str("$$"),
                Segment::Var(name) => match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("$(");
                        out.push_str(name);
                        out.push(')');
                    }
                },
            }
        }
        out
    }
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}
