//! Configuration module for genshard
//!
//! Settings are resolved in layers:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GENSHARD_*)
//! 3. Manifest `[build]` section (genshard.toml)
//! 4. User config (~/.config/genshard/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Modules, filegroups and host tools come only from the manifest.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    build_from_env, env_build, load_manifest, load_user_build, parse_with_warnings,
    resolve_settings, user_config_path, LoadedManifest, ENV_ALLOW_MISSING, ENV_OUT_DIR,
    ENV_SHARD_SIZE, MANIFEST_FILE,
};
pub use types::{
    BuildConfig, CodegenConfig, FilegroupConfig, HostToolConfig, Manifest, UserConfig,
};
