//! Module planning
//!
//! Orchestrates everything for one [`CodegenRequest`]: resolve tools and
//! sources through the [`BuildContext`], register location labels, build
//! and expand tasks, plan the merge, then declare the resulting rules.

use tracing::{debug, info, warn};

use crate::domain::entities::{
    CodegenRequest, GenerationTask, InputFile, Location, LocationTable, ModulePlan, Rule,
    RuleKind, SandboxSpec,
};
use crate::domain::ports::{BuildContext, SrcResolution, ToolResolution};
use crate::domain::services::command_expander::CommandExpander;
use crate::domain::services::merge_planner::{manifest_path, plan_merge};
use crate::domain::services::sharder;
use crate::domain::services::task_builder::TaskBuilder;
use crate::domain::value_objects::{path, ExcludePatterns, PlanSettings, Property, Template};
use crate::error::{GenError, GenResult};

/// Modules with more outputs than this expose a single phony dependency.
pub const MAX_DIRECT_OUTPUT_DEPS: usize = 6;

/// Name of the phony file standing in for many outputs
pub const PHONY_NAME: &str = "genrule-phony";

/// Plan one module and declare its rules to `ctx`.
///
/// Errors are scoped to the module name.
pub fn plan_module<C>(ctx: &mut C, request: &CodegenRequest) -> GenResult<ModulePlan>
where
    C: BuildContext + ?Sized,
{
    info!(module = %request.name, "planning module");
    let plan = plan(ctx, request).map_err(|e| e.in_module(request.name.as_str()))?;
    for rule in &plan.rules {
        ctx.declare_rule(&request.name, rule.clone());
    }
    Ok(plan)
}

/// Files and labels resolved for one module
struct Resolved {
    locations: LocationTable,
    tools: Vec<String>,
    inputs: Vec<InputFile>,
    missing: Vec<String>,
}

fn plan<C>(ctx: &C, request: &CodegenRequest) -> GenResult<ModulePlan>
where
    C: BuildContext + ?Sized,
{
    let settings = ctx.settings().clone();
    let output = request.output_template()?;
    let cmd = Template::parse(&request.cmd, Property::Cmd)?;
    let shard_size = request.effective_shard_size(settings.shard_size)?;
    let gen_root = settings.gen_root(&request.package_dir, &request.name);
    let intermediates = settings.intermediates_dir(&request.package_dir, &request.name);

    let mut resolved = resolve(ctx, request, &settings)?;

    if resolved.inputs.is_empty() && !resolved.missing.is_empty() {
        return Ok(missing_only(request, resolved.missing));
    }

    let tasks = TaskBuilder::new(&gen_root, &output, &cmd, shard_size).build(&resolved.inputs)?;

    for out in tasks.iter().flat_map(|task| task.outputs.iter()) {
        let label = path::rel_to(out, &gen_root).unwrap_or(out);
        resolved
            .locations
            .add(label, Location::Output(out.clone()))?;
    }

    let has_tools = !request.tools.is_empty() || !request.tool_files.is_empty();
    let expander = CommandExpander::new(&resolved.locations, has_tools);
    let mut rules = Vec::with_capacity(tasks.len() + 2);
    for task in &tasks {
        let command = expander.expand(task)?;
        let rule = generate_rule(task, command, &resolved.tools, &intermediates);
        debug!(rule = %rule.name, outputs = rule.outputs.len(), "planned generate rule");
        rules.push(rule);
    }

    let merge = plan_merge(&gen_root, &tasks);
    if let Some(merge) = &merge {
        rules.push(merge.to_rule(&settings.zip_tool, &settings.sync_tool));
    }

    let output_files: Vec<String> = tasks
        .iter()
        .flat_map(|task| task.final_outputs().iter().cloned())
        .collect();

    let output_deps = if output_files.len() <= MAX_DIRECT_OUTPUT_DEPS {
        output_files.clone()
    } else {
        let phony = path::join([gen_root.as_str(), PHONY_NAME]);
        rules.push(Rule::phony(phony.clone(), output_files.clone()));
        vec![phony]
    };

    let missing = resolved.missing;
    if !missing.is_empty() {
        warn!(
            module = %request.name,
            missing = ?missing,
            "replacing rules with error rules for missing dependencies"
        );
        rules = rules
            .into_iter()
            .map(|rule| rule.into_error(&request.name, &missing))
            .collect();
    }

    Ok(ModulePlan {
        name: request.name.clone(),
        exported_include_dirs: exported_include_dirs(&gen_root, request),
        tasks,
        merge,
        rules,
        output_files,
        output_deps,
        missing_dependencies: missing,
    })
}

/// Resolve tools, tool files and sources, registering their labels in order.
fn resolve<C>(ctx: &C, request: &CodegenRequest, settings: &PlanSettings) -> GenResult<Resolved>
where
    C: BuildContext + ?Sized,
{
    let permissive = settings.allow_missing_dependencies;
    let mut resolved = Resolved {
        locations: LocationTable::new(),
        tools: Vec::new(),
        inputs: Vec::new(),
        missing: Vec::new(),
    };

    for tool in &request.tools {
        match ctx.resolve_tool(tool) {
            ToolResolution::Found(found) => {
                resolved.tools.push(found.clone());
                resolved.locations.add(tool, Location::Tool(vec![found]))?;
            }
            ToolResolution::NoOutput => {
                return Err(GenError::ToolMissingOutput { name: tool.clone() });
            }
            ToolResolution::Disabled if !permissive => {
                return Err(GenError::DisabledDependency { name: tool.clone() });
            }
            ToolResolution::NotFound if !permissive => {
                return Err(GenError::MissingDependency {
                    property: Property::Tools,
                    name: tool.clone(),
                });
            }
            ToolResolution::Disabled | ToolResolution::NotFound => {
                resolved.missing.push(tool.clone());
                resolved.locations.add(
                    tool,
                    Location::Missing(format!("***missing tool {}***", tool)),
                )?;
            }
        }
    }

    for entry in &request.tool_files {
        match ctx.resolve_srcs(&request.package_dir, entry) {
            SrcResolution::Files(files) => {
                let paths: Vec<String> = files.iter().map(InputFile::path).collect();
                resolved.tools.extend(paths.iter().cloned());
                resolved.locations.add(entry, Location::Tool(paths))?;
            }
            SrcResolution::Missing if permissive => {
                resolved.missing.push(entry.clone());
                resolved.locations.add(
                    entry,
                    Location::Missing(format!("***missing tool {}***", entry)),
                )?;
            }
            SrcResolution::Missing => {
                return Err(GenError::MissingDependency {
                    property: Property::Tools,
                    name: entry.clone(),
                });
            }
        }
    }

    let excludes = ExcludePatterns::new(&request.exclude_srcs)?;
    for entry in &request.srcs {
        match ctx.resolve_srcs(&request.package_dir, entry) {
            SrcResolution::Files(files) => {
                let kept: Vec<InputFile> = files
                    .into_iter()
                    .filter(|file| !is_excluded(&excludes, file, &request.package_dir))
                    .collect();
                let paths = kept.iter().map(InputFile::path).collect();
                resolved.locations.add(entry, Location::Input(paths))?;
                resolved.inputs.extend(kept);
            }
            SrcResolution::Missing if permissive => {
                resolved.missing.push(entry.clone());
                resolved.locations.add(
                    entry,
                    Location::Missing(format!("***missing srcs {}***", entry)),
                )?;
            }
            SrcResolution::Missing => {
                return Err(GenError::MissingDependency {
                    property: Property::Srcs,
                    name: entry.clone(),
                });
            }
        }
    }

    debug!(
        tools = resolved.tools.len(),
        inputs = resolved.inputs.len(),
        labels = resolved.locations.len(),
        "resolved module dependencies"
    );
    Ok(resolved)
}

/// Exclusions match the file's own relative path or its path relative to
/// the requesting package.
fn is_excluded(excludes: &ExcludePatterns, file: &InputFile, package_dir: &str) -> bool {
    if excludes.is_empty() {
        return false;
    }
    if excludes.is_excluded(file.rel()) {
        return true;
    }
    let full = file.path();
    path::rel_to(&full, package_dir).is_some_and(|rel| excludes.is_excluded(rel))
}

fn generate_rule(
    task: &GenerationTask,
    command: String,
    tools: &[String],
    intermediates: &str,
) -> Rule {
    let (name, description) = if task.is_sharded() {
        (
            format!("generator{}", task.shard),
            format!("generate {}", task.shard),
        )
    } else if let [only] = task.outputs.as_slice() {
        ("generator".to_string(), format!("generate {}", path::base(only)))
    } else {
        ("generator".to_string(), "generate".to_string())
    };

    Rule {
        name,
        description,
        kind: RuleKind::Generate,
        command,
        inputs: task.inputs.iter().map(InputFile::path).collect(),
        tools: tools.to_vec(),
        outputs: task.outputs.clone(),
        sandbox: Some(SandboxSpec {
            gen_dir: task.gen_dir.clone(),
            manifest: manifest_path(intermediates, task.shard, task.shards),
        }),
        rspfile: None,
    }
}

fn exported_include_dirs(gen_root: &str, request: &CodegenRequest) -> Vec<String> {
    let final_dir = sharder::final_dir(gen_root);
    if request.export_include_dirs.is_empty() {
        return vec![final_dir];
    }
    request
        .export_include_dirs
        .iter()
        .map(|dir| path::join([final_dir.as_str(), request.package_dir.as_str(), dir.as_str()]))
        .collect()
}

fn missing_only(request: &CodegenRequest, missing: Vec<String>) -> ModulePlan {
    warn!(
        module = %request.name,
        missing = ?missing,
        "no inputs resolved; module reduced to an error rule"
    );
    ModulePlan {
        name: request.name.clone(),
        rules: vec![Rule::error("generator", &request.name, &missing)],
        missing_dependencies: missing,
        ..ModulePlan::default()
    }
}
