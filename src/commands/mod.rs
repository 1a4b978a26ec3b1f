//! Command handlers, one module per subcommand

mod check;
mod expand;
mod plan;

pub use check::cmd_check;
pub use expand::cmd_expand;
pub use plan::cmd_plan;

use anyhow::{Context, Result};

use genshard::application::{PlanOptions, PlanResult, PlanUseCase};
use genshard::config::{BuildConfig, ConfigWarning};
use genshard::error::GenError;

use crate::cli::ManifestArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ErrorEvent, StartEvent, WarningEvent};
use crate::ui::views::plan::render_warning;

/// `[build]` overrides given on the command line
fn build_flags(args: &ManifestArgs) -> BuildConfig {
    BuildConfig {
        out_dir: args.out_dir.clone(),
        shard_size: args.shard_size,
        allow_missing_dependencies: args.allow_missing.then_some(true),
        zip_tool: None,
        sync_tool: None,
    }
}

fn report_warnings(warnings: &[ConfigWarning], json: bool) -> Result<()> {
    for warning in warnings {
        if json {
            emit_event(&WarningEvent::from(warning))?;
        } else {
            eprint!("{}", render_warning(warning));
        }
    }
    Ok(())
}

/// Emit the error and failed completion events for `command`.
fn report_failure(command: &str, err: &GenError, json: bool) -> Result<()> {
    if json {
        emit_event(&ErrorEvent::new(command, err.to_string()).with_property(err.property()))?;
        emit_event(&CompleteEvent::failure(command))?;
    }
    Ok(())
}

/// Load and plan the manifest named by `args`, reporting warnings and errors.
fn run_plan(command: &str, args: &ManifestArgs, json: bool) -> Result<PlanResult> {
    if json {
        emit_event(&StartEvent::new(command))?;
    }

    let mut options = PlanOptions::new(&args.manifest);
    options.modules = args.modules.clone();
    options.flags = build_flags(args);
    let (options, user_warnings) = options.with_process_layers();
    report_warnings(&user_warnings, json)?;

    let result = match PlanUseCase::new(options).execute() {
        Ok(result) => result,
        Err(err) => {
            report_failure(command, &err, json)?;
            return Err(err).with_context(|| format!("failed to plan {}", args.manifest.display()));
        }
    };
    report_warnings(&result.warnings, json)?;
    Ok(result)
}
