//! `genshard check`

use anyhow::Result;

use crate::cli::ManifestArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ModuleEvent};
use crate::ui::views::plan::{render_check_summary, render_module_header};

pub fn cmd_check(args: &ManifestArgs, json: bool, verbose: u8) -> Result<()> {
    let result = super::run_plan("check", args, json)?;

    if json {
        for plan in result.error_modules() {
            emit_event(&ModuleEvent::from(plan))?;
        }
        emit_event(
            &CompleteEvent::success("check").with_counts(result.plans.len(), result.rule_count()),
        )?;
        return Ok(());
    }

    for plan in &result.plans {
        if verbose > 0 || plan.is_error() {
            print!("{}", render_module_header(plan));
        }
    }
    print!("{}", render_check_summary(&result));
    Ok(())
}
