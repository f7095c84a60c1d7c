use chrono::TimeDelta;

/// Compact human rendering of an elapsed time: `5s`, `1m 5s`, `2h 30m`.
///
/// Seconds are dropped once the span reaches an hour. Negative spans render as
/// `0s`.
pub fn format_duration(d: TimeDelta) -> String {
    let total = d.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
