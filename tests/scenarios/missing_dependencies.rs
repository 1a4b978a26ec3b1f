//! Missing tools and filegroups, strict and permissive.

use pretty_assertions::assert_eq;

use genshard::domain::entities::RuleKind;
use genshard::{plan_module, CodegenRequest, PlanSettings};

use crate::common::*;

fn permissive() -> PlanSettings {
    PlanSettings {
        allow_missing_dependencies: true,
        ..PlanSettings::default()
    }
}

fn with_tool(tool: &str, srcs: &[&str]) -> CodegenRequest {
    CodegenRequest {
        tools: vec![tool.to_string()],
        ..codegen(srcs, Some("$(SRC).h"), "$(location) < $(in) > $(out)")
    }
}

#[test]
fn missing_tool_is_an_error_by_default() {
    let mut ws = workspace();
    let err = plan_module(&mut ws, &with_tool("scanner", &["a.xml"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "module \"codegen\": tools: missing dependency \"scanner\""
    );
    assert!(ws.declared_rules().is_empty());
}

#[test]
fn missing_filegroup_is_an_error_by_default() {
    let mut ws = workspace();
    let err = plan_module(&mut ws, &with_tool("host_tool", &[":gone"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "module \"codegen\": srcs: missing dependency \":gone\""
    );
}

#[test]
fn permissive_mode_declares_failing_rules() {
    let mut ws = workspace_with(permissive());
    let plan = plan_module(&mut ws, &with_tool("scanner", &["a.xml", "b.xml"])).unwrap();

    assert!(plan.is_error());
    assert_eq!(plan.missing_dependencies, vec!["scanner"]);
    assert_eq!(plan.output_files, vec![gen_path("a.xml.h"), gen_path("b.xml.h")]);

    let rules: Vec<_> = ws.rules_for("codegen").collect();
    assert_eq!(rules.len(), 1);
    let rule = rules[0];
    assert_eq!(rule.kind, RuleKind::Error);
    assert_eq!(rule.name, "generator");
    assert_eq!(rule.description, "generate (missing dependencies)");
    assert_eq!(
        rule.command,
        "echo 'module \"codegen\" missing dependencies: scanner' >&2 && false"
    );
    assert_eq!(rule.outputs, plan.output_files);
    assert!(rule.inputs.is_empty());
    assert!(rule.sandbox.is_none());
}

#[test]
fn permissive_mode_keeps_planning_remaining_sources() {
    let mut ws = workspace_with(permissive());
    let request = CodegenRequest {
        srcs: vec![":gone".to_string(), ":single_source_filegroup".to_string()],
        ..with_tool("host_tool", &[])
    };

    let plan = plan_module(&mut ws, &request).unwrap();

    assert_eq!(plan.missing_dependencies, vec![":gone"]);
    assert_eq!(plan.output_files, vec![gen_path("src_file.h")]);
    assert!(plan.rules.iter().all(|r| r.kind == RuleKind::Error));
}

#[test]
fn permissive_mode_with_nothing_resolved() {
    let mut ws = workspace_with(permissive());
    let plan = plan_module(&mut ws, &with_tool("scanner", &[":gone"])).unwrap();

    assert_eq!(plan.missing_dependencies, vec!["scanner", ":gone"]);
    assert!(plan.tasks.is_empty());
    assert!(plan.output_files.is_empty());
    assert_eq!(plan.rules.len(), 1);
    assert_eq!(plan.rules[0].kind, RuleKind::Error);
    assert!(plan.rules[0]
        .command
        .contains("missing dependencies: scanner, :gone"));
}

#[test]
fn disabled_tool_counts_as_missing_when_permissive() {
    let mut ws = workspace_with(permissive());
    ws.add_tool("off", genshard::ToolResolution::Disabled);
    let plan = plan_module(&mut ws, &with_tool("off", &["a.xml"])).unwrap();
    assert_eq!(plan.missing_dependencies, vec!["off"]);

    let mut strict = workspace();
    strict.add_tool("off", genshard::ToolResolution::Disabled);
    let err = plan_module(&mut strict, &with_tool("off", &["a.xml"])).unwrap_err();
    assert!(err
        .to_string()
        .ends_with("tools: depends on disabled module \"off\""));
}
