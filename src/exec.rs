//! Synchronous external command execution.
//!
//! Each invocation is built once as a [`CommandSpec`], echoed to stdout for
//! the audit trail, and run with inherited standard streams. Failures come
//! back as structured errors rather than terminating the host process, so
//! the orchestration layer (and its tests) can observe which invocation
//! failed.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;

/// An external command line: executable path followed by flags and
/// positional file arguments. Built once per batch, executed once.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<OsString>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(&mut self, arg: impl Into<OsString>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn arg_list(&self) -> &[OsString] {
        &self.args
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", Path::new(arg).display())?;
        }
        Ok(())
    }
}

/// Blocking child-process execution, abstracted so tests can record the
/// command lines a pipeline produces and script their exit codes.
pub trait CommandRunner {
    /// Run the command to completion and report its exit code.
    fn status(&mut self, spec: &CommandSpec) -> Result<i32, Error>;
}

/// Real runner: child inherits our stdin/stdout/stderr, no capture.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn status(&mut self, spec: &CommandSpec) -> Result<i32, Error> {
        println!("running: {spec}");
        let status = Command::new(spec.program())
            .args(spec.arg_list())
            .status()
            .map_err(|source| Error::Launch { program: spec.program_name(), source })?;
        // Death by signal carries no code; report it as a plain failure.
        Ok(status.code().unwrap_or(1))
    }
}

/// Run one command and convert a non-zero exit into [`Error::ToolFailed`],
/// so a batch loop short-circuits with `?` on the first failure.
pub fn run_tool(runner: &mut dyn CommandRunner, spec: &CommandSpec) -> Result<(), Error> {
    let code = runner.status(spec)?;
    if code != 0 {
        return Err(Error::ToolFailed { program: spec.program_name(), code });
    }
    Ok(())
}
