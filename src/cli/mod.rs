//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
pub mod context;
mod exit_status;
mod logging;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use logging::init_tracing;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args)?;
    Ok(status.into())
}
