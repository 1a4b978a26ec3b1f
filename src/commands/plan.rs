//! `genshard plan`

use anyhow::Result;

use crate::cli::ManifestArgs;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ModuleEvent, RuleEvent};
use crate::ui::views::plan::{render_module, render_plan_summary};

pub fn cmd_plan(args: &ManifestArgs, json: bool, verbose: u8) -> Result<()> {
    let result = super::run_plan("plan", args, json)?;

    if json {
        for plan in &result.plans {
            for rule in &plan.rules {
                emit_event(&RuleEvent::new(&plan.name, rule))?;
            }
            emit_event(&ModuleEvent::from(plan))?;
        }
        emit_event(
            &CompleteEvent::success("plan").with_counts(result.plans.len(), result.rule_count()),
        )?;
        return Ok(());
    }

    for plan in &result.plans {
        print!("{}", render_module(plan, verbose));
    }
    print!("{}", render_plan_summary(&result));
    Ok(())
}
