//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigPrecision};
use crate::stamp::Precision;

use super::commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "buildstamp")]
#[command(about = "Write the current UTC build time into the front-end's build-time module", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Target file (default: ../src/build-time.ts next to this tool)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Fractional-second precision of the timestamp [default: micros]
    #[arg(short, long, global = true, value_enum)]
    pub(crate) precision: Option<Precision>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Timezone used by `show` to display the stamp (e.g., "Asia/Shanghai", "UTC", "local")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Suppress the confirmation line after writing
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Enable debug output (config and target resolution)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Optional values: only apply if CLI didn't set them
        if self.precision.is_none() {
            self.precision = config.precision.map(|precision| match precision {
                ConfigPrecision::Secs => Precision::Secs,
                ConfigPrecision::Millis => Precision::Millis,
                ConfigPrecision::Micros => Precision::Micros,
            });
        }
        if self.output.is_none() {
            self.output = config.output_path();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    /// Effective precision: CLI, then config, then micros
    pub(crate) fn precision(&self) -> Precision {
        self.precision.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("buildstamp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
        assert!(cli.precision.is_none());
        assert_eq!(cli.precision(), Precision::Micros);
        assert!(!cli.json && !cli.quiet && !cli.debug);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["show", "-j", "--timezone", "UTC", "-o", "web/build-time.ts"]);
        assert_eq!(cli.command, Some(Commands::Show));
        assert!(cli.json);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.output.as_deref(), Some(Path::new("web/build-time.ts")));
    }

    #[test]
    fn rejects_unknown_precision() {
        assert!(Cli::try_parse_from(["buildstamp", "--precision", "nanos"]).is_err());
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            output: Some(PathBuf::from("/repo/src/build-time.ts")),
            precision: Some(ConfigPrecision::Secs),
            timezone: Some("Asia/Shanghai".to_string()),
            quiet: true,
            debug: true,
            source: None,
        };
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.output, Some(PathBuf::from("/repo/src/build-time.ts")));
        assert_eq!(cli.precision(), Precision::Secs);
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Shanghai"));
        assert!(cli.quiet);
        assert!(cli.debug);
    }

    #[test]
    fn cli_values_win_over_config() {
        let config = Config {
            output: Some(PathBuf::from("/from/config.ts")),
            precision: Some(ConfigPrecision::Secs),
            timezone: Some("Asia/Shanghai".to_string()),
            ..Config::default()
        };
        let cli = parse(&["-o", "/from/cli.ts", "-p", "millis", "--timezone", "UTC"])
            .with_config(&config);
        assert_eq!(cli.output, Some(PathBuf::from("/from/cli.ts")));
        assert_eq!(cli.precision(), Precision::Millis);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn explicit_default_precision_wins_over_config() {
        let config = Config {
            precision: Some(ConfigPrecision::Secs),
            ..Config::default()
        };
        let cli = parse(&["-p", "micros"]).with_config(&config);
        assert_eq!(cli.precision(), Precision::Micros);

        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.precision(), Precision::Secs);
    }
}
