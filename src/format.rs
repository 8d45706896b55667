//! Size and timestamp formatting for report output.

use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Timestamp layout used everywhere in the report (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a byte count in human-readable binary units.
///
/// Values below 1024 render as plain byte counts ("0 bytes", "1 byte",
/// "1023 bytes"); larger values divide by 1024 per step through KiB, MiB,
/// GiB, and TiB with one decimal place. PiB is the unbounded fallback once
/// nothing smaller fits.
pub fn format_size(bytes: u64) -> String {
    if bytes == 1 {
        return "1 byte".to_string();
    }
    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }

    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64 / 1024.0;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} PiB", value)
}

/// Format a timestamp as a fixed-width local-time string (`YYYY-MM-DD HH:MM:SS`).
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Format the current local time in the standard report layout.
pub fn format_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
