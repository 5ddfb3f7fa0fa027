//! Build-time stamp
//!
//! Captures a UTC instant and renders it as the generated
//! `export const BUILD_TIME = "...";` module, or reads one back.

pub(crate) mod target;
pub(crate) mod writer;

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;

use crate::consts::BUILD_TIME_CONST;
use crate::error::AppError;

pub(crate) use target::resolve_output;
pub(crate) use writer::{StoredStamp, read_stamp, write_stamp};

/// Fractional-second digits in the rendered timestamp
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum Precision {
    /// Whole seconds
    Secs,
    /// Milliseconds (3 digits)
    Millis,
    /// Microseconds (6 digits, default)
    #[default]
    Micros,
}

impl Precision {
    fn seconds_format(self) -> SecondsFormat {
        match self {
            Precision::Secs => SecondsFormat::Secs,
            Precision::Millis => SecondsFormat::Millis,
            Precision::Micros => SecondsFormat::Micros,
        }
    }
}

/// A single captured build instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct BuildStamp {
    time: DateTime<Utc>,
}

impl BuildStamp {
    pub(crate) fn now() -> Self {
        Self::at(Utc::now())
    }

    pub(crate) fn at(time: DateTime<Utc>) -> Self {
        Self { time }
    }

    pub(crate) fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// RFC 3339 with an explicit `+00:00` offset, e.g. `2026-10-17T09:30:12.123456+00:00`
    pub(crate) fn timestamp(&self, precision: Precision) -> String {
        self.time.to_rfc3339_opts(precision.seconds_format(), false)
    }

    /// Full contents of the generated module: blank line, declaration, newline
    pub(crate) fn declaration(&self, precision: Precision) -> String {
        format!(
            "\nexport const {BUILD_TIME_CONST} = \"{}\";\n",
            self.timestamp(precision)
        )
    }

    /// Parse an RFC 3339 literal in any offset, normalized to UTC
    pub(crate) fn parse(literal: &str) -> Result<Self, AppError> {
        DateTime::parse_from_rfc3339(literal)
            .map(|dt| Self::at(dt.with_timezone(&Utc)))
            .map_err(|source| AppError::InvalidTimestamp {
                input: literal.to_string(),
                source,
            })
    }

    /// Read the stamp back out of a generated module's text, along with the
    /// literal exactly as it appears there.
    ///
    /// `origin` is only used to label a missing declaration.
    pub(crate) fn parse_declaration<'a>(
        text: &'a str,
        origin: &Path,
    ) -> Result<(Self, &'a str), AppError> {
        let literal = find_literal(text, origin)?;
        Ok((Self::parse(literal)?, literal))
    }
}

/// The quoted timestamp of the first `BUILD_TIME` declaration in `text`, verbatim
fn find_literal<'a>(text: &'a str, origin: &Path) -> Result<&'a str, AppError> {
    text.lines()
        .find_map(declaration_literal)
        .ok_or_else(|| AppError::MissingDeclaration {
            path: origin.to_path_buf(),
        })
}

/// Extract `<ts>` from a line of the form `export const BUILD_TIME = "<ts>";`
fn declaration_literal(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix("export const")?.trim_start();
    let rest = rest.strip_prefix(BUILD_TIME_CONST)?.trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();
    let rest = rest.strip_prefix('"')?;
    let rest = rest.trim_end().strip_suffix(';').unwrap_or(rest).trim_end();
    rest.strip_suffix('"')
}
