use chrono::TimeDelta;

/// Human-readable age, e.g. "3m 12s ago"; negative ages (clock skew) read "from now"
pub(crate) fn format_age(age: TimeDelta) -> String {
    let secs = age.num_seconds();
    if secs == 0 {
        return "just now".to_string();
    }
    let suffix = if secs < 0 { "from now" } else { "ago" };
    format!("{} {suffix}", format_span(secs.unsigned_abs()))
}

/// Two most significant units only
fn format_span(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = secs % 86_400 / 3_600;
    let minutes = secs % 3_600 / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
