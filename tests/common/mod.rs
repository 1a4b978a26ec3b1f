//! Common test utilities for genshard scenario and CLI tests.
//!
//! - `workspace()`: an in-memory workspace with the usual tools and filegroups
//! - `codegen()`: a request for the `codegen` module
//! - `TestProject`: a temp directory holding a manifest and source files

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use genshard::{CodegenRequest, InputFile, PlanSettings, ToolResolution, Workspace};

/// Final output directory of the `codegen` module in the root package
pub const GEN_DIR: &str = "out/.intermediates/codegen/gen/genshard";

pub fn workspace() -> Workspace {
    workspace_with(PlanSettings::default())
}

pub fn workspace_with(settings: PlanSettings) -> Workspace {
    let mut ws = Workspace::new(".", settings);
    ws.add_tool("host_tool", ToolResolution::Found("out/host_tool".to_string()));
    ws.add_filegroup("single_source_filegroup", vec![InputFile::new("", "src_file")]);
    ws.add_filegroup(
        "multi_source_filegroup",
        vec![InputFile::new("", "src_file_1"), InputFile::new("", "src_file_2")],
    );
    ws.add_filegroup("empty_filegroup", Vec::new());
    ws
}

pub fn codegen(srcs: &[&str], output: Option<&str>, cmd: &str) -> CodegenRequest {
    CodegenRequest {
        srcs: srcs.iter().map(|s| s.to_string()).collect(),
        output: output.map(String::from),
        ..CodegenRequest::new("codegen", cmd)
    }
}

pub fn gen_path(name: &str) -> String {
    format!("{}/{}", GEN_DIR, name)
}

/// A throwaway project directory for CLI tests.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn with_manifest(content: &str) -> Self {
        let project = Self::new();
        project.write("genshard.toml", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("genshard.toml")
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Run the genshard binary in the project directory.
    ///
    /// `HOME` and `XDG_CONFIG_HOME` point into the project so a developer's
    /// own user config can't leak in.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_genshard"))
            .current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("GENSHARD_SHARD_SIZE")
            .env_remove("GENSHARD_OUT_DIR")
            .env_remove("GENSHARD_ALLOW_MISSING_DEPENDENCIES")
            .args(args)
            .output()
            .unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse every non-empty stdout line as a JSON event.
pub fn events(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
