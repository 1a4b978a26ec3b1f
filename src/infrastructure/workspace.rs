//! Workspace - the manifest-backed BuildContext
//!
//! Holds the filegroups and host tools declared in a manifest, expands
//! source globs against the directory tree, and records every rule the
//! planner declares.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::config::{FilegroupConfig, HostToolConfig, Manifest};
use crate::domain::entities::{InputFile, Rule};
use crate::domain::ports::{BuildContext, SrcResolution, ToolResolution};
use crate::domain::value_objects::{path, PlanSettings};

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A build workspace rooted at a directory on disk.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    settings: PlanSettings,
    filegroups: HashMap<String, Vec<InputFile>>,
    tools: HashMap<String, ToolResolution>,
    rules: Vec<(String, Rule)>,
}

impl Workspace {
    /// An empty workspace; add filegroups and tools before planning.
    pub fn new(root: impl Into<PathBuf>, settings: PlanSettings) -> Self {
        Self {
            root: root.into(),
            settings,
            filegroups: HashMap::new(),
            tools: HashMap::new(),
            rules: Vec::new(),
        }
    }

    /// A workspace populated from `manifest`.
    pub fn from_manifest(root: impl Into<PathBuf>, settings: PlanSettings, manifest: &Manifest) -> Self {
        let mut workspace = Self::new(root, settings);
        for group in &manifest.filegroup {
            workspace.add_filegroup_config(group);
        }
        for tool in &manifest.host_tool {
            workspace.add_host_tool_config(tool);
        }
        workspace
    }

    /// Register a filegroup with already-resolved files.
    pub fn add_filegroup(&mut self, name: impl Into<String>, files: Vec<InputFile>) {
        self.filegroups.insert(name.into(), files);
    }

    /// Register a host tool by how it resolves.
    pub fn add_tool(&mut self, name: impl Into<String>, resolution: ToolResolution) {
        self.tools.insert(name.into(), resolution);
    }

    fn add_filegroup_config(&mut self, group: &FilegroupConfig) {
        let files = match &group.package_dir {
            Some(package_dir) => group
                .srcs
                .iter()
                .flat_map(|entry| self.package_files(package_dir, entry))
                .collect(),
            None => group
                .srcs
                .iter()
                .map(|src| InputFile::without_package(src.as_str()))
                .collect(),
        };
        self.add_filegroup(group.name.as_str(), files);
    }

    fn add_host_tool_config(&mut self, tool: &HostToolConfig) {
        let resolution = match (&tool.path, tool.enabled) {
            (_, false) => ToolResolution::Disabled,
            (None, true) => ToolResolution::NoOutput,
            (Some(path), true) => ToolResolution::Found(path.clone()),
        };
        self.add_tool(tool.name.as_str(), resolution);
    }

    /// Rules declared so far, with the module that declared each
    pub fn declared_rules(&self) -> &[(String, Rule)] {
        &self.rules
    }

    /// Rules declared by `module`
    pub fn rules_for<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |(owner, _)| owner == module)
            .map(|(_, rule)| rule)
    }

    /// Files a package entry names: the entry itself, or the glob's matches.
    fn package_files(&self, package_dir: &str, entry: &str) -> Vec<InputFile> {
        if !is_glob(entry) {
            return vec![InputFile::new(package_dir, entry)];
        }
        match self.glob(package_dir, entry) {
            Ok(files) => files,
            Err(e) => {
                warn!(pattern = entry, error = %e, "invalid glob in srcs");
                Vec::new()
            }
        }
    }

    /// Expand `pattern` relative to the package directory on disk.
    ///
    /// Matches are files only, sorted by path.
    fn glob(&self, package_dir: &str, pattern: &str) -> Result<Vec<InputFile>, glob::PatternError> {
        let pattern = Pattern::new(pattern)?;
        let base = self.root.join(package_dir);
        let mut files: Vec<InputFile> = WalkDir::new(&base)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let rel = entry.path().strip_prefix(&base).ok()?;
                let rel = to_build_path(rel);
                pattern
                    .matches_with(&rel, GLOB_OPTIONS)
                    .then(|| InputFile::new(package_dir, rel))
            })
            .collect();
        files.sort_by_key(InputFile::path);
        trace!(package = package_dir, pattern = %pattern, matches = files.len(), "expanded glob");
        Ok(files)
    }
}

impl BuildContext for Workspace {
    fn settings(&self) -> &PlanSettings {
        &self.settings
    }

    fn resolve_srcs(&self, package_dir: &str, entry: &str) -> SrcResolution {
        match entry.strip_prefix(':') {
            Some(name) => match self.filegroups.get(name) {
                Some(files) => SrcResolution::Files(files.clone()),
                None => SrcResolution::Missing,
            },
            None => SrcResolution::Files(self.package_files(package_dir, entry)),
        }
    }

    fn resolve_tool(&self, name: &str) -> ToolResolution {
        self.tools
            .get(name)
            .cloned()
            .unwrap_or(ToolResolution::NotFound)
    }

    fn declare_rule(&mut self, module: &str, rule: Rule) {
        trace!(module, rule = %rule.name, "declared rule");
        self.rules.push((module.to_string(), rule));
    }
}

fn is_glob(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}

/// Slash-separated form of a relative host path
fn to_build_path(rel: &Path) -> String {
    path::join(rel.components().map(|c| c.as_os_str().to_string_lossy()))
}
