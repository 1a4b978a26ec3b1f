//! Input sharding
//!
//! Repeating a command per input can exceed command-line limits, so inputs
//! are split into contiguous shards of bounded size.

use crate::domain::value_objects::{path, PlanSettings, ShardSize};

/// Split `items` into contiguous shards of at most `size`, preserving order.
pub fn shard<T>(items: &[T], size: ShardSize) -> Vec<&[T]> {
    items.chunks(size.get()).collect()
}

/// Directory shard `index` writes to under `gen_root`.
///
/// A lone shard writes straight into the final directory; otherwise each
/// shard gets its own numbered directory.
pub fn shard_gen_dir(gen_root: &str, index: usize, shards: usize) -> String {
    if shards > 1 {
        path::join([gen_root, index.to_string().as_str()])
    } else {
        final_dir(gen_root)
    }
}

/// Directory final outputs end up in
pub fn final_dir(gen_root: &str) -> String {
    path::join([gen_root, PlanSettings::FINAL_SUB_DIR])
}
