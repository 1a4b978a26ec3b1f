//! GenerationTask entity - one shard's worth of generation work

use serde::Serialize;

use crate::domain::entities::InputFile;
use crate::error::{GenError, GenResult};

/// A group of inputs handled by one command invocation.
///
/// `outputs` and `inputs` are index-aligned. When the request is sharded,
/// `outputs` point into the shard's own directory and `copy_to` holds the
/// matching final paths; otherwise `copy_to` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationTask {
    pub inputs: Vec<InputFile>,
    pub outputs: Vec<String>,
    pub copy_to: Vec<String>,
    /// Directory this task's sandbox writes into
    pub gen_dir: String,
    /// Command chain with per-input variables already substituted
    pub cmd: String,
    pub shard: usize,
    pub shards: usize,
}

impl GenerationTask {
    /// Whether this task is one of several shards
    pub fn is_sharded(&self) -> bool {
        self.shards > 1
    }

    /// Final output paths, whether or not the task is sharded
    pub fn final_outputs(&self) -> &[String] {
        if self.copy_to.is_empty() {
            &self.outputs
        } else {
            &self.copy_to
        }
    }

    /// Reject tasks that would produce nothing.
    pub fn validate(&self) -> GenResult<()> {
        if self.outputs.is_empty() {
            return Err(GenError::NoOutputs);
        }
        Ok(())
    }
}
