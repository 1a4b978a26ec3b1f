//! Output collision detection
//!
//! Every output path must come from exactly one input across the whole
//! request, not just within a shard.

use std::collections::HashMap;

use crate::domain::entities::InputFile;
use crate::error::{GenError, GenResult};

/// Append-only map from output path to the input that first produced it.
#[derive(Debug, Default)]
pub struct OutputCollisionSet {
    seen: HashMap<String, InputFile>,
}

impl OutputCollisionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `input` produces `output`.
    ///
    /// Fails if a different input already produced the same path.
    pub fn insert(&mut self, output: &str, input: &InputFile) -> GenResult<()> {
        if let Some(first) = self.seen.get(output) {
            return Err(GenError::OutputCollision {
                first: first.path(),
                second: input.path(),
                output: output.to_string(),
            });
        }
        self.seen.insert(output.to_string(), input.clone());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Check a whole set of `(input, output)` pairs.
pub fn check_collisions<'a, I>(pairs: I) -> GenResult<OutputCollisionSet>
where
    I: IntoIterator<Item = (&'a InputFile, &'a str)>,
{
    let mut set = OutputCollisionSet::new();
    for (input, output) in pairs {
        set.insert(output, input)?;
    }
    Ok(set)
}
