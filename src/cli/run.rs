use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{init::init, print::print, transform::transform},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Transform(cmd)) => transform(cmd),
        Some(Command::Print(cmd)) => print(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
