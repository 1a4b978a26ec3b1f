//! Domain Services
//!
//! Pure planning logic over domain entities. Nothing here performs I/O;
//! the outside world is reached only through [`BuildContext`].
//!
//! [`BuildContext`]: crate::domain::ports::BuildContext

pub mod collision;
pub mod command_expander;
pub mod merge_planner;
pub mod module_planner;
pub mod path_expander;
pub mod sharder;
pub mod task_builder;

pub use collision::{check_collisions, OutputCollisionSet};
pub use command_expander::CommandExpander;
pub use merge_planner::plan_merge;
pub use module_planner::plan_module;
pub use path_expander::{expand_all, expand_output_path};
pub use task_builder::TaskBuilder;
