//! Format command implementation

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, warn};

use crate::error::Error;
use crate::exec::{run_tool, CommandRunner, CommandSpec, SystemRunner};
use crate::scan::{collect_source_files, SOURCE_ROOT};
use crate::tools::{find_tool, PathResolver, ToolResolver};

const FORMAT_TOOL: &str = "clang-format";

/// Files per subprocess invocation, to stay under command-line length limits.
const BATCH_SIZE: usize = 200;

#[derive(Args)]
pub struct FormatArgs {
    /// Report formatting violations without rewriting files
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: FormatArgs) -> Result<()> {
    let project_root = env::current_dir().context("failed to resolve working directory")?;
    execute(&PathResolver, &mut SystemRunner, &project_root, args.check)?;
    Ok(())
}

/// Resolve the formatter, collect the bundled tree, and run one subprocess
/// per batch of at most [`BATCH_SIZE`] files, stopping at the first failure.
fn execute(
    resolver: &dyn ToolResolver,
    runner: &mut dyn CommandRunner,
    project_root: &Path,
    check: bool,
) -> Result<(), Error> {
    let tool =
        find_tool(resolver, FORMAT_TOOL).ok_or(Error::ToolNotFound { tool: FORMAT_TOOL })?;
    debug!(tool = %tool.display(), "resolved formatter");

    let root = project_root.join(SOURCE_ROOT);
    let files = collect_source_files(&root);
    if files.is_empty() {
        warn!("no source files under {}", root.display());
        return Ok(());
    }

    for batch in files.chunks(BATCH_SIZE) {
        let mut spec = CommandSpec::new(&tool);
        if check {
            spec.arg("-n").arg("--Werror");
        } else {
            spec.arg("-i");
        }
        spec.args(batch.iter().cloned());
        run_tool(runner, &spec)?;
    }
    Ok(())
}
