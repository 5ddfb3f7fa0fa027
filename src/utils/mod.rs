pub(crate) mod debug;
pub(crate) mod format;
pub(crate) mod timezone;

pub(crate) use debug::{debug_enabled, set_debug};
pub(crate) use format::format_age;
pub(crate) use timezone::DisplayZone;
