//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts: template syntax,
//! selectors, sandbox path mapping and planning settings.

mod command_var;
mod config_warning;
mod exclude_patterns;
mod output_template;
pub mod path;
mod plan_settings;
mod property;
mod sandbox;
mod selector;
mod shard_size;
mod shell;
pub mod template;

pub use command_var::CommandVar;
pub use config_warning::ConfigWarning;
pub use exclude_patterns::ExcludePatterns;
pub use output_template::{OutputPart, OutputTemplate};
pub use plan_settings::PlanSettings;
pub use property::{LabelForm, LabelKind, Property};
pub use sandbox::{Sandbox, SANDBOX_DIR};
pub use selector::Selector;
pub use shard_size::ShardSize;
pub use shell::{shell_escape, shell_escape_join};
pub use template::Template;
