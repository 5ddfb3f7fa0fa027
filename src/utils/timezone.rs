use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone `show` renders a stamp in; generated stamps themselves are always UTC
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DisplayZone {
    /// The machine's local zone
    System,
    Named(Tz),
}

impl FromStr for DisplayZone {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "" => Ok(DisplayZone::System),
            name if name.eq_ignore_ascii_case("local") => Ok(DisplayZone::System),
            name if name.eq_ignore_ascii_case("utc") || name.eq_ignore_ascii_case("z") => {
                Ok(DisplayZone::Named(chrono_tz::UTC))
            }
            name => name
                .parse::<Tz>()
                .map(DisplayZone::Named)
                .map_err(|_| AppError::InvalidTimezone {
                    input: name.to_string(),
                }),
        }
    }
}

impl DisplayZone {
    /// No zone configured means the system zone
    pub(crate) fn from_option(value: Option<&str>) -> Result<Self, AppError> {
        value.map_or(Ok(DisplayZone::System), str::parse)
    }

    /// The stamp's wall-clock time in this zone, offset included
    pub(crate) fn localize(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            DisplayZone::System => utc.with_timezone(&Local).fixed_offset(),
            DisplayZone::Named(tz) => utc.with_timezone(&tz).fixed_offset(),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            DisplayZone::System => "local",
            DisplayZone::Named(tz) => tz.name(),
        }
    }
}
