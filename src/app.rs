use std::path::Path;

use chrono::Utc;

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::stamp::{BuildStamp, StoredStamp, read_stamp, write_stamp};
use crate::utils::{DisplayZone, format_age};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) output: &'a Path,
}

fn print_json(value: &serde_json::Value) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_write(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let stamp = BuildStamp::now();
    write_stamp(ctx.output, &stamp, ctx.cli.precision())?;

    let timestamp = stamp.timestamp(ctx.cli.precision());
    if ctx.cli.json {
        print_json(&serde_json::json!({
            "path": ctx.output.display().to_string(),
            "build_time": timestamp,
        }))?;
    } else if !ctx.cli.quiet {
        println!("Wrote BUILD_TIME {timestamp} to {}", ctx.output.display());
    }
    Ok(())
}

fn handle_print(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let stamp = BuildStamp::now();
    let declaration = stamp.declaration(ctx.cli.precision());
    if ctx.cli.json {
        print_json(&serde_json::json!({
            "build_time": stamp.timestamp(ctx.cli.precision()),
            "declaration": declaration,
        }))
    } else {
        print!("{declaration}");
        Ok(())
    }
}

fn handle_show(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let timezone = DisplayZone::from_option(ctx.cli.timezone.as_deref())?;
    let StoredStamp {
        stamp,
        literal: build_time,
    } = read_stamp(ctx.output)?;
    let age = Utc::now().signed_duration_since(stamp.time());
    let local_time = timezone.localize(stamp.time());

    if ctx.cli.json {
        return print_json(&serde_json::json!({
            "path": ctx.output.display().to_string(),
            "build_time": build_time,
            "local_time": local_time.to_rfc3339(),
            "age_seconds": age.num_seconds(),
        }));
    }

    println!("Path:       {}", ctx.output.display());
    println!("Build time: {build_time}");
    println!(
        "Local time: {} ({})",
        local_time.format("%Y-%m-%d %H:%M:%S %:z"),
        timezone.label()
    );
    println!("Age:        {}", format_age(age));
    Ok(())
}

pub(crate) fn handle_command(command: Commands, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match command {
        Commands::Write => handle_write(ctx),
        Commands::Print => handle_print(ctx),
        Commands::Show => handle_show(ctx),
    }
}
