//! tidyc: formatting and include-hygiene runner for the bundled C sources
//!
//! This tool wraps the versioned clang tooling (clang-format,
//! clang-include-cleaner) installed on the system so the whole bundled
//! source tree can be rewritten or verified with a single command.

mod cli;
mod error;
mod exec;
mod scan;
mod tools;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        // A failing external tool dictates our exit code; everything else
        // is an internal fatal condition and exits 1.
        let code = err
            .downcast_ref::<error::Error>()
            .map_or(1, error::Error::exit_code);
        std::process::exit(code);
    }
}
