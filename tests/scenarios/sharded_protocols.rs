//! Sharded generation driven from a manifest on disk: glob sources,
//! per-shard sandboxes and the merge back into one directory.

use pretty_assertions::assert_eq;

use genshard::domain::entities::RuleKind;
use genshard::{PlanOptions, PlanUseCase};

use crate::common::*;

const MANIFEST: &str = r#"
[build]
shard_size = 2

[[host_tool]]
name = "wayland_scanner"
path = "out/host/wayland_scanner"

[[codegen]]
name = "protocols"
srcs = ["proto/*.xml"]
tools = ["wayland_scanner"]
output = "$(SRC:BASE)-protocol.c"
cmd = "$(location wayland_scanner) private-code < $(in) > $(out)"
"#;

const ROOT: &str = "out/.intermediates/protocols/gen";

fn project() -> TestProject {
    let project = TestProject::with_manifest(MANIFEST);
    for name in ["e", "c", "a", "d", "b"] {
        project.write(&format!("proto/{}.xml", name), "<protocol/>");
    }
    project.write("proto/README.md", "not a protocol");
    project
}

fn plan(project: &TestProject) -> genshard::ModulePlan {
    let mut result = PlanUseCase::new(PlanOptions::new(project.manifest_path()))
        .execute()
        .unwrap();
    assert_eq!(result.plans.len(), 1);
    result.plans.remove(0)
}

#[test]
fn glob_sources_are_sorted_and_sharded() {
    let project = project();
    let plan = plan(&project);

    assert_eq!(plan.shard_count(), 3);
    let shard_inputs: Vec<Vec<String>> = plan
        .tasks
        .iter()
        .map(|task| task.inputs.iter().map(|i| i.path()).collect())
        .collect();
    assert_eq!(
        shard_inputs,
        vec![
            vec!["proto/a.xml", "proto/b.xml"],
            vec!["proto/c.xml", "proto/d.xml"],
            vec!["proto/e.xml"],
        ]
    );

    let names: Vec<&str> = plan.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["generator0", "generator1", "generator2", "merge"]);
}

#[test]
fn each_shard_writes_to_its_own_sandbox() {
    let project = project();
    let plan = plan(&project);

    let last = &plan.rules[2];
    assert_eq!(last.description, "generate 2");
    assert_eq!(
        last.command,
        "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host/wayland_scanner private-code < proto/e.xml > __SBOX_SANDBOX_DIR__/out/e-protocol.c'"
    );
    assert_eq!(last.outputs, vec![format!("{}/2/e-protocol.c", ROOT)]);
    assert_eq!(last.tools, vec!["out/host/wayland_scanner"]);

    let sandbox = last.sandbox.as_ref().unwrap();
    assert_eq!(sandbox.gen_dir, format!("{}/2", ROOT));
    assert_eq!(
        sandbox.manifest,
        "out/.intermediates/protocols/genshard_2.sbox.textproto"
    );

    assert_eq!(
        plan.tasks[0].copy_to,
        vec![
            format!("{}/genshard/a-protocol.c", ROOT),
            format!("{}/genshard/b-protocol.c", ROOT),
        ]
    );
}

#[test]
fn merge_rule_recombines_shards() {
    let project = project();
    let plan = plan(&project);

    let merge = plan.rules.iter().find(|r| r.kind == RuleKind::Merge).unwrap();
    assert_eq!(merge.description, "merge shards");
    assert_eq!(
        merge.command,
        "soong_zip -o out/.intermediates/protocols/gen/genshard.zip \
         @out/.intermediates/protocols/gen/genshard.zip.rsp && \
         zipsync -d out/.intermediates/protocols/gen/genshard \
         out/.intermediates/protocols/gen/genshard.zip"
    );
    assert_eq!(merge.inputs.len(), 5);
    assert_eq!(merge.outputs, plan.output_files);

    let rsp = merge.rspfile.as_ref().unwrap();
    assert_eq!(rsp.path, "out/.intermediates/protocols/gen/genshard.zip.rsp");
    insta::assert_snapshot!(rsp.content.trim(), @"-C out/.intermediates/protocols/gen/0 -f out/.intermediates/protocols/gen/0/a-protocol.c -f out/.intermediates/protocols/gen/0/b-protocol.c -C out/.intermediates/protocols/gen/1 -f out/.intermediates/protocols/gen/1/c-protocol.c -f out/.intermediates/protocols/gen/1/d-protocol.c -C out/.intermediates/protocols/gen/2 -f out/.intermediates/protocols/gen/2/e-protocol.c");
}

#[test]
fn dependents_see_the_final_directory() {
    let project = project();
    let plan = plan(&project);

    assert_eq!(
        plan.output_files,
        ["a", "b", "c", "d", "e"]
            .iter()
            .map(|n| format!("{}/genshard/{}-protocol.c", ROOT, n))
            .collect::<Vec<_>>()
    );
    assert_eq!(plan.output_deps, plan.output_files);
    assert_eq!(plan.exported_include_dirs, vec![format!("{}/genshard", ROOT)]);
}

#[test]
fn unsharded_module_writes_straight_to_the_final_directory() {
    let project = project();
    project.write(
        "genshard.toml",
        &MANIFEST.replace("shard_size = 2", "shard_size = 10"),
    );
    let plan = plan(&project);

    assert_eq!(plan.shard_count(), 1);
    assert!(plan.merge.is_none());
    assert_eq!(plan.rules.len(), 1);
    assert_eq!(plan.rules[0].name, "generator");
    assert_eq!(plan.rules[0].outputs, plan.output_files);
    assert_eq!(
        plan.rules[0].sandbox.as_ref().unwrap().manifest,
        "out/.intermediates/protocols/genshard.sbox.textproto"
    );
}
