//! Duration formatting helpers.

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Format a duration in seconds to a human-readable string.
///
/// Durations of a day or more drop the seconds component.
pub fn format_duration(secs: u64) -> String {
    if secs < MINUTE {
        format!("{}s", secs)
    } else if secs < HOUR {
        format!("{}m {}s", secs / MINUTE, secs % MINUTE)
    } else if secs < DAY {
        format!(
            "{}h {}m {}s",
            secs / HOUR,
            (secs % HOUR) / MINUTE,
            secs % MINUTE
        )
    } else {
        format!(
            "{}d {}h {}m",
            secs / DAY,
            (secs % DAY) / HOUR,
            (secs % HOUR) / MINUTE
        )
    }
}
