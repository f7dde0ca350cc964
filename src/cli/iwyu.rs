//! Include-hygiene command implementation
//!
//! Wraps clang-include-cleaner, which needs the compile commands generated
//! by a previous build of the requested target and profile.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, warn};

use crate::error::Error;
use crate::exec::{run_tool, CommandRunner, CommandSpec, SystemRunner};
use crate::scan::{collect_source_files, SOURCE_ROOT};
use crate::tools::{find_tool, PathResolver, ToolResolver};

const IWYU_TOOL: &str = "clang-include-cleaner";

/// Build output root holding per-target, per-profile metadata.
const BUILD_ROOT: &str = "_build";

#[derive(Args)]
pub struct IwyuArgs {
    /// Build target whose compile_commands.json to use
    pub target: String,

    /// Build profile the metadata was generated for
    #[arg(long, default_value = "release")]
    pub profile: String,

    /// Report include issues without rewriting files
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: IwyuArgs) -> Result<()> {
    let project_root = env::current_dir().context("failed to resolve working directory")?;
    execute(&PathResolver, &mut SystemRunner, &project_root, &args)?;
    Ok(())
}

/// One unbatched invocation over the whole tree. The metadata check comes
/// first so a stale or missing build fails before any file work.
fn execute(
    resolver: &dyn ToolResolver,
    runner: &mut dyn CommandRunner,
    project_root: &Path,
    args: &IwyuArgs,
) -> Result<(), Error> {
    let tool = find_tool(resolver, IWYU_TOOL).ok_or(Error::ToolNotFound { tool: IWYU_TOOL })?;
    debug!(tool = %tool.display(), "resolved include cleaner");

    let build_dir =
        project_root.join(BUILD_ROOT).join(&args.target).join(&args.profile).join("build");
    let compile_commands = build_dir.join("compile_commands.json");
    if !compile_commands.exists() {
        return Err(Error::MissingCompileCommands { path: compile_commands });
    }

    let root = project_root.join(SOURCE_ROOT);
    let files = collect_source_files(&root);
    if files.is_empty() {
        warn!("no source files under {}", root.display());
        return Ok(());
    }

    let mut spec = CommandSpec::new(&tool);
    spec.arg("-p").arg(build_dir.as_os_str());
    if !args.check {
        spec.arg("--fix");
    }
    spec.args(files);
    run_tool(runner, &spec)
}
