//! genshard - plans sharded, per-file code generation commands
//!
//! A codegen module names a set of source files, an output path template
//! and a shell command template. genshard expands the templates for every
//! input, splits the inputs into shards, and declares one sandboxed rule per
//! shard plus a merge rule that recombines sharded outputs. It never runs
//! the commands itself; the declared rules are handed to a build system.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{PlanOptions, PlanResult, PlanUseCase};
pub use config::{load_manifest, LoadedManifest, Manifest};
pub use domain::entities::{CodegenRequest, GenerationTask, InputFile, ModulePlan, Rule, RuleKind};
pub use domain::ports::{BuildContext, SrcResolution, ToolResolution};
pub use domain::services::plan_module;
pub use domain::value_objects::{OutputTemplate, PlanSettings, ShardSize};
pub use error::{GenError, GenResult};
pub use infrastructure::Workspace;
