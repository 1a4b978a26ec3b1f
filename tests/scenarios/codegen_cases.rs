//! Table-driven codegen cases: tools, filegroups, output selectors and
//! the configuration errors each property can raise.

use pretty_assertions::assert_eq;

use genshard::{load_manifest, plan_module, CodegenRequest, Workspace};

use crate::common::*;

struct Case {
    name: &'static str,
    tools: &'static [&'static str],
    tool_files: &'static [&'static str],
    srcs: &'static [&'static str],
    output: Option<&'static str>,
    prefix: Option<&'static str>,
    suffix: Option<&'static str>,
    cmd: &'static str,
    expect: Expect,
}

enum Expect {
    Commands(&'static [&'static str]),
    Error(&'static str),
}

const BASE: Case = Case {
    name: "",
    tools: &["host_tool"],
    tool_files: &[],
    srcs: &["src_file"],
    output: Some("prefix_$(SRC)_suffix"),
    prefix: None,
    suffix: None,
    cmd: "$(location host_tool) gen < $(in) > $(out)",
    expect: Expect::Commands(&[]),
};

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "host tool by label",
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < src_file > __SBOX_SANDBOX_DIR__/out/prefix_src_file_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "tool file by label",
            tools: &[],
            tool_files: &["tool_src_file"],
            cmd: "$(location tool_src_file) gen < $(in) > $(out)",
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/tool_src_file gen < src_file > __SBOX_SANDBOX_DIR__/out/prefix_src_file_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "default tool location",
            cmd: "$(location) gen < $(in) > $(out)",
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < src_file > __SBOX_SANDBOX_DIR__/out/prefix_src_file_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "uppercase variables",
            cmd: "$(LOCATION host_tool) gen < $(SRC) > $(OUT)",
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < src_file > __SBOX_SANDBOX_DIR__/out/prefix_src_file_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "single source filegroup",
            srcs: &[":single_source_filegroup"],
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < src_file > __SBOX_SANDBOX_DIR__/out/prefix_src_file_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "multi source filegroup",
            srcs: &[":multi_source_filegroup"],
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < src_file_1 > __SBOX_SANDBOX_DIR__/out/prefix_src_file_1_suffix' && \
                 bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < src_file_2 > __SBOX_SANDBOX_DIR__/out/prefix_src_file_2_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "base selector",
            srcs: &["txt/a/file.txt"],
            output: Some("prefix_$(SRC:BASE)_suffix"),
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < txt/a/file.txt > __SBOX_SANDBOX_DIR__/out/prefix_file_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "base and extension selector",
            srcs: &["txt/a/file.txt"],
            output: Some("prefix_$(SRC:BASE.EXT)_suffix"),
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < txt/a/file.txt > __SBOX_SANDBOX_DIR__/out/prefix_file.txt_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "path and base selector",
            srcs: &["txt/a/file.txt"],
            output: Some("prefix_$(SRC:PATH/BASE)_suffix"),
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < txt/a/file.txt > __SBOX_SANDBOX_DIR__/out/prefix_txt/a/file_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "path, base and extension selector",
            srcs: &["txt/a/file.txt"],
            output: Some("prefix_$(SRC:PATH/BASE.EXT)_suffix"),
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < txt/a/file.txt > __SBOX_SANDBOX_DIR__/out/prefix_txt/a/file.txt_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "constant output name",
            output: Some("output"),
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < src_file > __SBOX_SANDBOX_DIR__/out/output'",
            ]),
            ..BASE
        },
        Case {
            name: "legacy prefix and suffix",
            output: None,
            prefix: Some("legacy_prefix_"),
            suffix: Some("_legacy_suffix"),
            expect: Expect::Commands(&[
                "bash -c '__SBOX_SANDBOX_DIR__/tools/src/out/host_tool gen < src_file > __SBOX_SANDBOX_DIR__/out/legacy_prefix_src_file_legacy_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "literal dollar",
            cmd: "echo $$HOME > $(out)",
            expect: Expect::Commands(&[
                "bash -c 'echo $HOME > __SBOX_SANDBOX_DIR__/out/prefix_src_file_suffix'",
            ]),
            ..BASE
        },
        Case {
            name: "no sources",
            srcs: &[],
            expect: Expect::Error("srcs: must have at least one source file"),
            ..BASE
        },
        Case {
            name: "empty filegroup",
            srcs: &[":empty_filegroup"],
            expect: Expect::Error("srcs: must have at least one source file"),
            ..BASE
        },
        Case {
            name: "outputs not unique",
            srcs: &[":multi_source_filegroup"],
            output: Some("not_unique"),
            expect: Expect::Error(
                "output: generation conflict: both 'src_file_1' and 'src_file_2' generate 'not_unique'",
            ),
            ..BASE
        },
        Case {
            name: "unknown output variable",
            output: Some("prefix_$(bad)_suffix"),
            expect: Expect::Error("output: unknown variable '$(bad)'"),
            ..BASE
        },
        Case {
            name: "unknown location label",
            cmd: "$(location bad_name) gen < $(in) > $(out)",
            expect: Expect::Error("cmd: unknown location label \"bad_name\""),
            ..BASE
        },
        Case {
            name: "default location without tools",
            tools: &[],
            cmd: "$(location) gen < $(in) > $(out)",
            expect: Expect::Error("cmd: at least one `tools` or `tool_files` is required"),
            ..BASE
        },
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn request(case: &Case) -> CodegenRequest {
    CodegenRequest {
        tools: to_strings(case.tools),
        tool_files: to_strings(case.tool_files),
        srcs: to_strings(case.srcs),
        output: case.output.map(String::from),
        prefix: case.prefix.map(String::from),
        suffix: case.suffix.map(String::from),
        ..CodegenRequest::new("codegen", case.cmd)
    }
}

#[test]
fn codegen_cases() {
    for case in cases() {
        let mut ws = workspace();
        let result = plan_module(&mut ws, &request(&case));
        match (result, &case.expect) {
            (Ok(plan), Expect::Commands(expected)) => {
                assert_eq!(plan.commands(), expected.to_vec(), "case: {}", case.name);
                assert_eq!(ws.declared_rules().len(), plan.rules.len(), "case: {}", case.name);
            }
            (Err(err), Expect::Error(expected)) => {
                let message = err.to_string();
                assert!(
                    message.starts_with("module \"codegen\": "),
                    "case: {}: {}",
                    case.name,
                    message
                );
                assert!(
                    message.contains(expected),
                    "case: {}: expected {:?} in {:?}",
                    case.name,
                    expected,
                    message
                );
                assert!(ws.declared_rules().is_empty(), "case: {}", case.name);
            }
            (Ok(plan), Expect::Error(expected)) => {
                panic!("case: {}: expected error {:?}, got {:?}", case.name, expected, plan.commands())
            }
            (Err(err), Expect::Commands(_)) => {
                panic!("case: {}: unexpected error {}", case.name, err)
            }
        }
    }
}

#[test]
fn defaults_are_inherited_from_the_manifest() {
    let project = TestProject::with_manifest(
        r#"
[[codegen_defaults]]
name = "copy_defaults"
cmd = "cp $(in) $(out)"

[[codegen]]
name = "codegen"
defaults = ["copy_defaults"]
srcs = ["in1"]
output = "$(SRC).h"
"#,
    );

    let loaded = load_manifest(&project.manifest_path()).unwrap();
    let requests = loaded.requests().unwrap();
    let mut ws = Workspace::from_manifest(project.path(), Default::default(), &loaded.manifest);

    let plan = plan_module(&mut ws, &requests[0]).unwrap();

    assert_eq!(
        plan.commands(),
        vec!["bash -c 'cp in1 __SBOX_SANDBOX_DIR__/out/in1.h'"]
    );
    assert_eq!(plan.output_files, vec![gen_path("in1.h")]);
}
