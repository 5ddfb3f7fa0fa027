mod app;
mod cli;
mod config;
mod consts;
mod error;
mod stamp;
mod utils;

use clap::Parser;

use app::{CommandContext, handle_command};
use cli::{Cli, parse_command};
use config::Config;
use error::AppError;
use stamp::resolve_output;
use utils::{debug_enabled, set_debug};

fn run() -> Result<(), AppError> {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    set_debug(cli.debug);

    if debug_enabled() {
        match &config.source {
            Some(path) => eprintln!("[DEBUG] loaded config from {}", path.display()),
            None => eprintln!("[DEBUG] no config file found"),
        }
    }

    let command = parse_command(cli.command);
    let output = resolve_output(cli.output.as_deref());
    if debug_enabled() {
        eprintln!("[DEBUG] command {command:?}, target {}", output.display());
    }

    let ctx = CommandContext {
        cli: &cli,
        output: &output,
    };
    handle_command(command, &ctx)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
