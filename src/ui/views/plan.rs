//! Text rendering for `genshard plan` and `genshard check`

use genshard::application::PlanResult;
use genshard::config::ConfigWarning;
use genshard::domain::entities::{ModulePlan, Rule, RuleKind};

fn kind_label(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::Generate => "generate",
        RuleKind::Merge => "merge",
        RuleKind::Phony => "phony",
        RuleKind::Error => "error",
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

pub fn render_warning(warning: &ConfigWarning) -> String {
    format!("warning: {}\n", warning)
}

pub fn render_module_header(plan: &ModulePlan) -> String {
    let mut out = format!(
        "module {}: {}, {}\n",
        plan.name,
        plural(plan.shard_count(), "shard"),
        plural(plan.output_files.len(), "output"),
    );
    if plan.is_error() {
        out.push_str(&format!(
            "  missing dependencies: {}\n",
            plan.missing_dependencies.join(", ")
        ));
    }
    out
}

pub fn render_rule(rule: &Rule) -> String {
    let mut out = format!("  rule {} [{}]\n", rule.name, kind_label(rule.kind));
    let mut field = |name: &str, value: &str| {
        if !value.is_empty() {
            out.push_str(&format!("    {:<12} {}\n", format!("{}:", name), value));
        }
    };
    field("description", &rule.description);
    field("command", &rule.command);
    field("inputs", &rule.inputs.join(" "));
    field("tools", &rule.tools.join(" "));
    field("outputs", &rule.outputs.join(" "));
    if let Some(sandbox) = &rule.sandbox {
        field("gen dir", &sandbox.gen_dir);
        field("manifest", &sandbox.manifest);
    }
    if let Some(rsp) = &rule.rspfile {
        field("rspfile", &rsp.path);
    }
    out
}

pub fn render_module(plan: &ModulePlan, verbose: u8) -> String {
    let mut out = render_module_header(plan);
    for rule in &plan.rules {
        out.push_str(&render_rule(rule));
    }
    if verbose > 0 {
        out.push_str(&format!("  output deps: {}\n", plan.output_deps.join(" ")));
        out.push_str(&format!(
            "  exported include dirs: {}\n",
            plan.exported_include_dirs.join(" ")
        ));
    }
    out
}

pub fn render_plan_summary(result: &PlanResult) -> String {
    format!(
        "Planned {}, {}\n",
        plural(result.plans.len(), "module"),
        plural(result.rule_count(), "rule")
    )
}

pub fn render_check_summary(result: &PlanResult) -> String {
    let errors = result.error_modules().count();
    if errors == 0 {
        format!("ok: {} planned\n", plural(result.plans.len(), "module"))
    } else {
        format!(
            "ok: {} planned, {} with missing dependencies\n",
            plural(result.plans.len(), "module"),
            errors
        )
    }
}
