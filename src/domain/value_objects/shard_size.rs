//! Shard size value object

use std::fmt;

use crate::error::{GenError, GenResult};

/// Upper bound on the number of inputs one generated task handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShardSize(usize);

impl ShardSize {
    /// Inputs per shard when nothing overrides it
    pub const DEFAULT: ShardSize = ShardSize(100);

    /// Validate a shard size; zero is rejected.
    pub fn new(size: usize) -> GenResult<Self> {
        if size == 0 {
            return Err(GenError::InvalidShardSize(size));
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Number of shards needed for `inputs` files
    pub fn shard_count(&self, inputs: usize) -> usize {
        inputs.div_ceil(self.0)
    }
}

impl Default for ShardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ShardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
