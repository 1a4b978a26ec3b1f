//! Manifest type definitions

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::entities::CodegenRequest;
use crate::domain::value_objects::{PlanSettings, ShardSize};
use crate::error::{GenError, GenResult};

/// `[build]` section: workspace-wide planning settings.
///
/// Every field is optional so layers (flags, env, manifest, user config)
/// can be stacked with [`BuildConfig::or`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_size: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_missing_dependencies: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_tool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_tool: Option<String>,
}

impl BuildConfig {
    /// Fill unset fields from `lower`.
    pub fn or(self, lower: BuildConfig) -> BuildConfig {
        BuildConfig {
            out_dir: self.out_dir.or(lower.out_dir),
            shard_size: self.shard_size.or(lower.shard_size),
            allow_missing_dependencies: self
                .allow_missing_dependencies
                .or(lower.allow_missing_dependencies),
            zip_tool: self.zip_tool.or(lower.zip_tool),
            sync_tool: self.sync_tool.or(lower.sync_tool),
        }
    }

    /// Resolve into settings, using built-in defaults for anything unset.
    pub fn into_settings(self) -> GenResult<PlanSettings> {
        let defaults = PlanSettings::default();
        Ok(PlanSettings {
            out_dir: self.out_dir.unwrap_or(defaults.out_dir),
            shard_size: match self.shard_size {
                Some(size) => ShardSize::new(size)?,
                None => defaults.shard_size,
            },
            allow_missing_dependencies: self
                .allow_missing_dependencies
                .unwrap_or(defaults.allow_missing_dependencies),
            zip_tool: self.zip_tool.unwrap_or(defaults.zip_tool),
            sync_tool: self.sync_tool.unwrap_or(defaults.sync_tool),
        })
    }
}

/// `[[filegroup]]`: a named list of source files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilegroupConfig {
    pub name: String,

    /// Owning package; omit for generated artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_dir: Option<String>,

    #[serde(default)]
    pub srcs: Vec<String>,
}

/// `[[host_tool]]`: a prebuilt tool commands can run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostToolConfig {
    pub name: String,

    /// Workspace-relative path of the binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// `[[codegen]]` or `[[codegen_defaults]]` entry as written.
///
/// Scalars set here override those inherited from `defaults`; lists are
/// appended after the inherited ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenConfig {
    pub name: String,

    /// Names of `[[codegen_defaults]]` entries to inherit, in order
    #[serde(default)]
    pub defaults: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_dir: Option<String>,

    #[serde(default)]
    pub srcs: Vec<String>,

    #[serde(default)]
    pub exclude_srcs: Vec<String>,

    #[serde(default)]
    pub tools: Vec<String>,

    #[serde(default)]
    pub tool_files: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_size: Option<usize>,

    #[serde(default)]
    pub export_include_dirs: Vec<String>,
}

impl CodegenConfig {
    /// Layer `self` over `base`.
    fn over(&self, base: CodegenConfig) -> CodegenConfig {
        let append = |lower: Vec<String>, upper: &[String]| {
            let mut all = lower;
            all.extend(upper.iter().cloned());
            all
        };
        CodegenConfig {
            name: self.name.clone(),
            defaults: Vec::new(),
            package_dir: self.package_dir.clone().or(base.package_dir),
            srcs: append(base.srcs, &self.srcs),
            exclude_srcs: append(base.exclude_srcs, &self.exclude_srcs),
            tools: append(base.tools, &self.tools),
            tool_files: append(base.tool_files, &self.tool_files),
            output: self.output.clone().or(base.output),
            prefix: self.prefix.clone().or(base.prefix),
            suffix: self.suffix.clone().or(base.suffix),
            cmd: self.cmd.clone().or(base.cmd),
            shard_size: self.shard_size.or(base.shard_size),
            export_include_dirs: append(base.export_include_dirs, &self.export_include_dirs),
        }
    }
}

/// The whole manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub filegroup: Vec<FilegroupConfig>,

    #[serde(default)]
    pub host_tool: Vec<HostToolConfig>,

    #[serde(default)]
    pub codegen_defaults: Vec<CodegenConfig>,

    #[serde(default)]
    pub codegen: Vec<CodegenConfig>,
}

impl Manifest {
    /// Resolve every `[[codegen]]` entry, applying defaults, in file order.
    ///
    /// Errors are plain messages; the loader attaches the file name.
    pub fn requests(&self) -> Result<Vec<CodegenRequest>, String> {
        let defaults: HashMap<&str, &CodegenConfig> = self
            .codegen_defaults
            .iter()
            .map(|d| (d.name.as_str(), d))
            .collect();

        let mut seen = HashSet::new();
        let mut requests = Vec::with_capacity(self.codegen.len());
        for module in &self.codegen {
            if !seen.insert(module.name.as_str()) {
                return Err(format!("duplicate codegen module \"{}\"", module.name));
            }
            let resolved = resolve_defaults(module, &defaults, &mut Vec::new())?;
            requests.push(into_request(resolved)?);
        }
        Ok(requests)
    }
}

/// User-level config file; only `[build]` is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub build: BuildConfig,
}

/// Apply `module.defaults` in order. `stack` holds only `codegen_defaults`
/// names; modules and defaults live in separate namespaces.
fn resolve_defaults<'a>(
    module: &'a CodegenConfig,
    defaults: &HashMap<&str, &'a CodegenConfig>,
    stack: &mut Vec<&'a str>,
) -> Result<CodegenConfig, String> {
    let mut base = CodegenConfig::default();
    for name in &module.defaults {
        let name = name.as_str();
        if stack.contains(&name) {
            return Err(format!(
                "codegen_defaults cycle: {} -> {}",
                stack.join(" -> "),
                name
            ));
        }
        let parent = defaults.get(name).copied().ok_or_else(|| {
            format!(
                "codegen \"{}\": unknown defaults \"{}\"",
                module.name, name
            )
        })?;
        stack.push(name);
        let inherited = resolve_defaults(parent, defaults, stack)?;
        stack.pop();
        base = inherited.over(base);
    }
    Ok(module.over(base))
}

fn into_request(config: CodegenConfig) -> Result<CodegenRequest, String> {
    let cmd = config
        .cmd
        .ok_or_else(|| format!("codegen \"{}\": missing required key 'cmd'", config.name))?;
    Ok(CodegenRequest {
        name: config.name,
        package_dir: config.package_dir.unwrap_or_default(),
        srcs: config.srcs,
        exclude_srcs: config.exclude_srcs,
        tools: config.tools,
        tool_files: config.tool_files,
        output: config.output,
        prefix: config.prefix,
        suffix: config.suffix,
        cmd,
        shard_size: config.shard_size,
        export_include_dirs: config.export_include_dirs,
    })
}

/// Unknown-key check needs the set of keys genshard understands.
pub(crate) const KNOWN_KEYS: &[&str] = &[
    "build",
    "out_dir",
    "shard_size",
    "allow_missing_dependencies",
    "zip_tool",
    "sync_tool",
    "filegroup",
    "host_tool",
    "codegen",
    "codegen_defaults",
    "name",
    "package_dir",
    "srcs",
    "path",
    "enabled",
    "defaults",
    "exclude_srcs",
    "tools",
    "tool_files",
    "output",
    "prefix",
    "suffix",
    "cmd",
    "export_include_dirs",
];

/// Error for a manifest-level problem in `file`
pub(crate) fn config_error(file: &std::path::Path, message: impl Into<String>) -> GenError {
    GenError::Config {
        file: file.to_path_buf(),
        message: message.into(),
    }
}
