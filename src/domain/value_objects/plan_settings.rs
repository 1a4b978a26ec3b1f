//! Planning settings shared by every module in one invocation

use crate::domain::value_objects::{path, ShardSize};

/// Workspace-wide settings the planner reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSettings {
    /// Root of all generated files, relative to the workspace
    pub out_dir: String,
    /// Default inputs per shard
    pub shard_size: ShardSize,
    /// Degrade missing dependencies to failing rules instead of errors
    pub allow_missing_dependencies: bool,
    /// Tool that zips per-shard outputs
    pub zip_tool: String,
    /// Tool that syncs a zip into the final directory
    pub sync_tool: String,
}

impl PlanSettings {
    /// Name of the directory final outputs are written to
    pub const FINAL_SUB_DIR: &'static str = "genshard";

    /// Intermediates directory for a module
    pub fn intermediates_dir(&self, package_dir: &str, module: &str) -> String {
        path::join([
            self.out_dir.as_str(),
            ".intermediates",
            package_dir,
            module,
        ])
    }

    /// Root of a module's generated files; shard and final dirs live under it.
    pub fn gen_root(&self, package_dir: &str, module: &str) -> String {
        path::join([
            self.intermediates_dir(package_dir, module).as_str(),
            "gen",
        ])
    }
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            out_dir: "out".to_string(),
            shard_size: ShardSize::DEFAULT,
            allow_missing_dependencies: false,
            zip_tool: "soong_zip".to_string(),
            sync_tool: "zipsync".to_string(),
        }
    }
}
