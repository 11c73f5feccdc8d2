//! Countdown arithmetic and formatting.

use chrono::{DateTime, TimeZone, Utc};

/// Format a countdown as `"{s}s"` or `"{m}m {s}s"`.
///
/// Minutes use floor division, so negative countdowns render with a
/// negative minute and a positive remainder: `-5` becomes `"-1m 55s"`.
///
/// # Examples
///
/// ```
/// use starrybus::domain::format_time_to_arrival;
///
/// assert_eq!(format_time_to_arrival(59), "59s");
/// assert_eq!(format_time_to_arrival(125), "2m 5s");
/// ```
pub fn format_time_to_arrival(seconds: i64) -> String {
    let minutes = seconds.div_euclid(60);
    if minutes == 0 {
        format!("{seconds}s")
    } else {
        format!("{minutes}m {}s", seconds - minutes * 60)
    }
}

/// Whole seconds from `now` until `instant`, rounding half up.
pub fn seconds_until<Tz: TimeZone>(instant: &DateTime<Tz>, now: DateTime<Utc>) -> i64 {
    let millis = instant
        .with_timezone(&Utc)
        .signed_duration_since(now)
        .num_milliseconds();
    (millis + 500).div_euclid(1000)
}
