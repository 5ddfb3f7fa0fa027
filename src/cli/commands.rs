//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Write the current UTC time to the build-time module (default)
    Write,
    /// Print the module that would be written, without touching disk
    Print,
    /// Read the existing build-time module and report its stamp and age
    Show,
}

/// Resolve the subcommand; bare invocation is `write`
pub(crate) fn parse_command(cmd: Option<Commands>) -> Commands {
    cmd.unwrap_or(Commands::Write)
}
