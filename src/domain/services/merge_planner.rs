//! Merge planning
//!
//! Collects the per-shard outputs of a sharded module into a [`MergePlan`].

use tracing::debug;

use crate::domain::entities::{GenerationTask, MergePlan, ShardCopy};
use crate::domain::services::sharder;
use crate::domain::value_objects::path;

/// Plan the merge for `tasks`, or `None` when nothing needs copying.
pub fn plan_merge(gen_root: &str, tasks: &[GenerationTask]) -> Option<MergePlan> {
    if tasks.iter().all(|task| task.copy_to.is_empty()) {
        return None;
    }

    let final_dir = sharder::final_dir(gen_root);
    let zip = format!("{}.zip", final_dir);
    let shards: Vec<ShardCopy> = tasks
        .iter()
        .filter(|task| !task.copy_to.is_empty())
        .map(|task| ShardCopy {
            gen_dir: task.gen_dir.clone(),
            files: task.outputs.clone(),
            copy_to: task.copy_to.clone(),
        })
        .collect();

    debug!(shards = shards.len(), zip = %zip, "planned merge");
    Some(MergePlan {
        final_dir,
        zip,
        shards,
    })
}

/// Name of the sandbox manifest for shard `index` of `shards`.
pub fn manifest_name(index: usize, shards: usize) -> String {
    if shards > 1 {
        format!("genshard_{}.sbox.textproto", index)
    } else {
        "genshard.sbox.textproto".to_string()
    }
}

/// Where the sandbox manifest for a task lives, outside its gen dir.
pub fn manifest_path(intermediates_dir: &str, index: usize, shards: usize) -> String {
    path::join([intermediates_dir, manifest_name(index, shards).as_str()])
}
