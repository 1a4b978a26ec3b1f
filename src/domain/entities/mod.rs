//! Domain Entities
//!
//! - `InputFile` - A source file with its owning package
//! - `CodegenRequest` - A declared generation module
//! - `GenerationTask` - One shard of generation work
//! - `Rule` - A command execution declared to the build system
//! - `MergePlan` - How sharded outputs are recombined
//! - `ModulePlan` - Everything planned for one module

mod input_file;
mod location;
mod merge_plan;
mod module_plan;
mod request;
mod rule;
mod task;

pub use input_file::InputFile;
pub use location::{Location, LocationTable};
pub use merge_plan::{MergePlan, ShardCopy};
pub use module_plan::ModulePlan;
pub use request::CodegenRequest;
pub use rule::{RspFile, Rule, RuleKind, SandboxSpec};
pub use task::GenerationTask;
