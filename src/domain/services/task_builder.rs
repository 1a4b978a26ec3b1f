//! Task construction
//!
//! Turns an ordered list of inputs into shard tasks. Per-input variables
//! (`$(SRC)`, `$(OUT)`) are filled in here, one command per input; every
//! other variable is carried through for [`CommandExpander`] to resolve once
//! all labels are known.
//!
//! [`CommandExpander`]: super::CommandExpander

use tracing::{debug, trace};

use crate::domain::entities::{GenerationTask, InputFile};
use crate::domain::services::collision::check_collisions;
use crate::domain::services::path_expander::expand_output_path;
use crate::domain::services::sharder;
use crate::domain::value_objects::{
    path, shell_escape, CommandVar, OutputTemplate, Sandbox, ShardSize, Template,
};
use crate::error::{GenError, GenResult};

/// Builds the tasks for one module.
#[derive(Debug)]
pub struct TaskBuilder<'a> {
    gen_root: &'a str,
    output: &'a OutputTemplate,
    cmd: &'a Template,
    shard_size: ShardSize,
}

impl<'a> TaskBuilder<'a> {
    pub fn new(
        gen_root: &'a str,
        output: &'a OutputTemplate,
        cmd: &'a Template,
        shard_size: ShardSize,
    ) -> Self {
        Self {
            gen_root,
            output,
            cmd,
            shard_size,
        }
    }

    /// Build one task per shard of `inputs`.
    ///
    /// Every output path is checked for collisions across all inputs before
    /// any task is built.
    pub fn build(&self, inputs: &[InputFile]) -> GenResult<Vec<GenerationTask>> {
        if inputs.is_empty() {
            return Err(GenError::EmptyInput);
        }

        let raw_outputs = inputs
            .iter()
            .map(|input| expand_output_path(self.output, input))
            .collect::<GenResult<Vec<String>>>()?;
        check_collisions(inputs.iter().zip(raw_outputs.iter().map(String::as_str)))?;

        let shards = sharder::shard(inputs, self.shard_size);
        let count = shards.len();
        let final_dir = sharder::final_dir(self.gen_root);
        debug!(inputs = inputs.len(), shards = count, "sharding inputs");

        let mut tasks = Vec::with_capacity(count);
        let mut offset = 0;
        for (index, shard_inputs) in shards.into_iter().enumerate() {
            let gen_dir = sharder::shard_gen_dir(self.gen_root, index, count);
            let sandbox = Sandbox::new(gen_dir.as_str());
            let raw = &raw_outputs[offset..offset + shard_inputs.len()];
            offset += shard_inputs.len();

            let mut outputs = Vec::with_capacity(raw.len());
            let mut copy_to = Vec::new();
            let mut commands = Vec::with_capacity(raw.len());
            for (input, raw_out) in shard_inputs.iter().zip(raw) {
                let out = path::join([gen_dir.as_str(), raw_out.as_str()]);
                if count > 1 {
                    copy_to.push(path::join([final_dir.as_str(), raw_out.as_str()]));
                }
                commands.push(wrap(&self.pre_expand(input, &out, &sandbox)));
                outputs.push(out);
            }

            let task = GenerationTask {
                inputs: shard_inputs.to_vec(),
                outputs,
                copy_to,
                gen_dir,
                cmd: commands.join(" && "),
                shard: index,
                shards: count,
            };
            task.validate()?;
            trace!(shard = index, outputs = task.outputs.len(), "built task");
            tasks.push(task);
        }
        Ok(tasks)
    }

    /// Fill in the per-input variables of the command for one input.
    ///
    /// Substituted values have `$` doubled, and `$$` is kept, so the result
    /// stays a valid template for the task-level pass.
    fn pre_expand(&self, input: &InputFile, out: &str, sandbox: &Sandbox) -> String {
        self.cmd.expand_partial(|name| {
            let var = CommandVar::parse(name).filter(|var| var.is_per_input())?;
            let value = match var {
                CommandVar::Inputs => sandbox.path_for_input(&input.path()),
                _ => sandbox.path_for_output(out),
            };
            Some(shell_escape(&value).replace('$', "$$"))
        })
    }
}

fn wrap(command: &str) -> String {
    format!("bash -c {}", shell_escape(command))
}
