//! Error taxonomy for the tool pipelines.
//!
//! Every fatal condition maps to a concrete exit code so the binary can
//! propagate a failing external tool's status unchanged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No versioned or bare variant of the tool resolved on PATH.
    #[error("{tool} not found on PATH")]
    ToolNotFound { tool: &'static str },

    /// The iwyu pipeline requires previously generated build metadata.
    #[error("compile_commands.json not found: {}", path.display())]
    MissingCompileCommands { path: PathBuf },

    /// The child process could not be spawned at all.
    #[error("failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// An external tool ran and exited non-zero. Aborts the whole run;
    /// remaining batches are never executed.
    #[error("{program} exited with status {code}")]
    ToolFailed { program: String, code: i32 },
}

impl Error {
    /// Exit code the host process should terminate with.
    ///
    /// A failing tool's own code is propagated exactly; internal fatal
    /// conditions exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ToolFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
