//! Plan Use Case
//!
//! Loads a manifest, stacks the configuration layers and plans every
//! selected codegen module against a manifest-backed [`Workspace`].

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{
    env_build, load_manifest, load_user_build, resolve_settings, user_config_path, BuildConfig,
    ConfigWarning, MANIFEST_FILE,
};
use crate::domain::entities::{CodegenRequest, ModulePlan};
use crate::domain::services::plan_module;
use crate::domain::value_objects::PlanSettings;
use crate::error::{GenError, GenResult};
use crate::infrastructure::Workspace;

/// Options for the plan operation
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Path to the manifest
    pub manifest: PathBuf,
    /// Modules to plan; empty plans all of them
    pub modules: Vec<String>,
    /// `[build]` overrides from command-line flags
    pub flags: BuildConfig,
    /// `[build]` overrides from the environment
    pub env: BuildConfig,
    /// `[build]` defaults from the user config
    pub user: BuildConfig,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(MANIFEST_FILE),
            modules: Vec::new(),
            flags: BuildConfig::default(),
            env: BuildConfig::default(),
            user: BuildConfig::default(),
        }
    }
}

impl PlanOptions {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            ..Self::default()
        }
    }

    /// Fill the environment and user-config layers from the process.
    ///
    /// Returns the warnings raised while reading the user config.
    pub fn with_process_layers(mut self) -> (Self, Vec<ConfigWarning>) {
        self.env = env_build();
        let (user, warnings) = load_user_build(user_config_path().as_deref());
        self.user = user;
        (self, warnings)
    }
}

/// Result of the plan operation
#[derive(Debug, Clone)]
pub struct PlanResult {
    pub manifest: PathBuf,
    pub settings: PlanSettings,
    /// One plan per module, in manifest order
    pub plans: Vec<ModulePlan>,
    /// Non-fatal manifest problems
    pub warnings: Vec<ConfigWarning>,
}

impl PlanResult {
    pub fn rule_count(&self) -> usize {
        self.plans.iter().map(|p| p.rules.len()).sum()
    }

    /// Modules planned with failing rules because dependencies are missing
    pub fn error_modules(&self) -> impl Iterator<Item = &ModulePlan> {
        self.plans.iter().filter(|p| p.is_error())
    }
}

/// Plan Use Case
pub struct PlanUseCase {
    options: PlanOptions,
}

impl PlanUseCase {
    pub fn new(options: PlanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PlanOptions {
        &self.options
    }

    /// Load the manifest and plan the selected modules.
    ///
    /// Stops at the first module that fails to plan.
    pub fn execute(&self) -> GenResult<PlanResult> {
        let loaded = load_manifest(&self.options.manifest)?;
        for warning in &loaded.warnings {
            warn!(%warning, "config warning");
        }

        let settings = resolve_settings(
            self.options.flags.clone(),
            self.options.env.clone(),
            &loaded.manifest,
            self.options.user.clone(),
        )
        .map_err(|e| match e {
            GenError::InvalidShardSize(_) => GenError::Config {
                file: loaded.path.clone(),
                message: e.to_string(),
            },
            other => other,
        })?;
        debug!(
            out_dir = %settings.out_dir,
            shard_size = settings.shard_size.get(),
            allow_missing = settings.allow_missing_dependencies,
            "resolved settings"
        );

        let requests = select(loaded.requests()?, &self.options.modules, &loaded.path)?;
        let mut workspace =
            Workspace::from_manifest(loaded.root(), settings.clone(), &loaded.manifest);

        let plans = requests
            .iter()
            .map(|request| plan_module(&mut workspace, request))
            .collect::<GenResult<Vec<_>>>()?;
        info!(
            modules = plans.len(),
            rules = workspace.declared_rules().len(),
            "planned manifest"
        );

        Ok(PlanResult {
            manifest: loaded.path,
            settings,
            plans,
            warnings: loaded.warnings,
        })
    }
}

/// Keep the requests named in `modules`, in manifest order.
fn select(
    requests: Vec<CodegenRequest>,
    modules: &[String],
    manifest: &Path,
) -> GenResult<Vec<CodegenRequest>> {
    if modules.is_empty() {
        return Ok(requests);
    }
    if let Some(unknown) = modules
        .iter()
        .find(|name| !requests.iter().any(|r| &r.name == *name))
    {
        return Err(GenError::Config {
            file: manifest.to_path_buf(),
            message: format!("unknown module \"{}\"", unknown),
        });
    }
    Ok(requests
        .into_iter()
        .filter(|r| modules.contains(&r.name))
        .collect())
}
