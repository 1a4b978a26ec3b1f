//! MergePlan entity - recombining sharded outputs
//!
//! Every shard writes to its own directory. The merge zips all shard
//! outputs (each relative to its shard dir) and syncs the zip into the
//! final directory, which clears stale files first. One rule does both, so
//! either every final output is fresh or none is.

use serde::Serialize;

use crate::domain::entities::{RspFile, Rule, RuleKind};
use crate::domain::value_objects::path;

/// Outputs of one shard and where each ends up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardCopy {
    pub gen_dir: String,
    pub files: Vec<String>,
    pub copy_to: Vec<String>,
}

/// How per-shard outputs become the final output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergePlan {
    pub final_dir: String,
    pub zip: String,
    pub shards: Vec<ShardCopy>,
}

impl MergePlan {
    /// Every per-shard output, in shard order
    pub fn inputs(&self) -> Vec<String> {
        self.shards
            .iter()
            .flat_map(|s| s.files.iter().cloned())
            .collect()
    }

    /// Every final output, in shard order
    pub fn outputs(&self) -> Vec<String> {
        self.shards
            .iter()
            .flat_map(|s| s.copy_to.iter().cloned())
            .collect()
    }

    /// Response file listing each shard dir and its files.
    pub fn rsp_content(&self) -> String {
        let mut args = String::new();
        for shard in &self.shards {
            args.push_str(" -C ");
            args.push_str(&shard.gen_dir);
            for file in &shard.files {
                args.push_str(" -f ");
                args.push_str(file);
            }
        }
        args
    }

    pub fn rsp_path(&self) -> String {
        format!("{}.rsp", self.zip)
    }

    /// The single rule that performs the merge.
    pub fn to_rule(&self, zip_tool: &str, sync_tool: &str) -> Rule {
        let rsp = self.rsp_path();
        Rule {
            name: "merge".to_string(),
            description: "merge shards".to_string(),
            kind: RuleKind::Merge,
            command: format!(
                "{zip_tool} -o {zip} @{rsp} && {sync_tool} -d {dir} {zip}",
                zip = self.zip,
                dir = self.final_dir,
            ),
            inputs: self.inputs(),
            tools: vec![zip_tool.to_string(), sync_tool.to_string()],
            outputs: self.outputs(),
            sandbox: None,
            rspfile: Some(RspFile {
                path: rsp,
                content: self.rsp_content(),
            }),
        }
    }

    /// Check that every copy keeps its path relative to its directory.
    pub fn is_consistent(&self) -> bool {
        self.shards.iter().all(|shard| {
            shard.files.len() == shard.copy_to.len()
                && shard.files.iter().zip(&shard.copy_to).all(|(from, to)| {
                    path::rel_to(from, &shard.gen_dir).is_some()
                        && path::rel_to(from, &shard.gen_dir) == path::rel_to(to, &self.final_dir)
                })
        })
    }
}
