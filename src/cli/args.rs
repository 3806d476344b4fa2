//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `transform`: Replace literal UI text with translation calls (dry-run by default)
//! - `print`: Print the transformed source of a single file
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Transform(cmd)) => cmd.common.verbose,
            Some(Command::Print(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TransformCommand {
    /// Files to transform (default: every source file under `includes`)
    pub paths: Vec<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PrintCommand {
    /// File to transform
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the config file in (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace literal UI text with t('key') calls and wire react-i18next
    Transform(TransformCommand),
    /// Print the transformed source of one file to stdout
    Print(PrintCommand),
    /// Initialize a new .glot-codemod.json configuration file
    Init(InitCommand),
}
