//! Manifest and user config loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::entities::CodegenRequest;
use crate::domain::value_objects::{ConfigWarning, PlanSettings};
use crate::error::{GenError, GenResult};

use super::types::{config_error, BuildConfig, Manifest, UserConfig, KNOWN_KEYS};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "genshard.toml";

/// Environment variable overriding `build.shard_size`
pub const ENV_SHARD_SIZE: &str = "GENSHARD_SHARD_SIZE";
/// Environment variable overriding `build.out_dir`
pub const ENV_OUT_DIR: &str = "GENSHARD_OUT_DIR";
/// Environment variable overriding `build.allow_missing_dependencies`
pub const ENV_ALLOW_MISSING: &str = "GENSHARD_ALLOW_MISSING_DEPENDENCIES";

/// A parsed manifest plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub manifest: Manifest,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedManifest {
    /// Directory source paths are resolved against
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Every codegen request, with defaults applied.
    pub fn requests(&self) -> GenResult<Vec<CodegenRequest>> {
        self.manifest
            .requests()
            .map_err(|message| config_error(&self.path, message))
    }
}

/// Load a manifest, collecting non-fatal warnings (e.g. unknown keys).
pub fn load_manifest(path: &Path) -> GenResult<LoadedManifest> {
    if !path.exists() {
        return Err(GenError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    let (manifest, warnings) = parse_with_warnings::<Manifest>(&content, path)?;
    debug!(
        path = %path.display(),
        modules = manifest.codegen.len(),
        filegroups = manifest.filegroup.len(),
        tools = manifest.host_tool.len(),
        "loaded manifest"
    );
    Ok(LoadedManifest {
        path: path.to_path_buf(),
        manifest,
        warnings,
    })
}

/// Parse TOML `content`, reporting unknown keys instead of failing on them.
pub fn parse_with_warnings<T: DeserializeOwned>(
    content: &str,
    path: &Path,
) -> GenResult<(T, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let value: T = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(path, e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key_path| {
            let key = key_path
                .split('.')
                .next_back()
                .unwrap_or(key_path.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key: key_path,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((value, warnings))
}

/// Location of the user config file, if a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("genshard").join("config.toml"))
}

/// Load `[build]` from the user config, if present.
///
/// A broken user config is reported and skipped rather than failing every
/// invocation.
pub fn load_user_build(path: Option<&Path>) -> (BuildConfig, Vec<ConfigWarning>) {
    let Some(path) = path.filter(|p| p.exists()) else {
        return (BuildConfig::default(), Vec::new());
    };
    let parsed = fs::read_to_string(path)
        .map_err(GenError::from)
        .and_then(|content| parse_with_warnings::<UserConfig>(&content, path));
    match parsed {
        Ok((config, warnings)) => (config.build, warnings),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable user config");
            (BuildConfig::default(), Vec::new())
        }
    }
}

/// `[build]` values taken from `GENSHARD_*` environment variables.
pub fn env_build() -> BuildConfig {
    build_from_env(|name| std::env::var(name).ok())
}

/// Like [`env_build`], reading variables through `lookup`.
pub fn build_from_env<F>(lookup: F) -> BuildConfig
where
    F: Fn(&str) -> Option<String>,
{
    let shard_size = lookup(ENV_SHARD_SIZE).and_then(|value| match value.trim().parse() {
        Ok(size) => Some(size),
        Err(_) => {
            warn!(var = ENV_SHARD_SIZE, value = %value, "ignoring non-numeric shard size");
            None
        }
    });
    let allow_missing = lookup(ENV_ALLOW_MISSING)
        .map(|value| value.to_lowercase() != "false" && value != "0" && !value.is_empty());

    BuildConfig {
        out_dir: lookup(ENV_OUT_DIR).filter(|dir| !dir.is_empty()),
        shard_size,
        allow_missing_dependencies: allow_missing,
        zip_tool: None,
        sync_tool: None,
    }
}

/// Stack the configuration layers, highest priority first, into settings.
pub fn resolve_settings(
    flags: BuildConfig,
    env: BuildConfig,
    manifest: &Manifest,
    user: BuildConfig,
) -> GenResult<PlanSettings> {
    flags
        .or(env)
        .or(manifest.build.clone())
        .or(user)
        .into_settings()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with(needle)
                && trimmed[needle.len()..].trim_start().starts_with('=')
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in KNOWN_KEYS {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
