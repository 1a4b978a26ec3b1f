//! Domain Layer
//!
//! The core of genshard: output naming, sharding, command expansion and
//! merge planning, with no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (InputFile, GenerationTask, Rule, ModulePlan)
//! - `value_objects/` - Immutable value types (Selector, OutputTemplate, ShardSize, Sandbox)
//! - `services/` - Planning services (TaskBuilder, CommandExpander, module planner)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Planning is deterministic string and path computation
//! 3. **Ports & Adapters** - Everything outside goes through [`ports::BuildContext`]

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
