//! Label formatting for chart axes and markers.

use crate::HorizontalPosition;
use chrono::{DateTime, Utc};

/// Format a number with exactly two decimals.
pub fn format_two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

/// Hour-resolution label for a time axis tick, e.g. "1994-02-02 12:00".
pub fn format_hour_label(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:00").to_string()
}

/// Marker label for a sample point, latitude first: "[30.00,100.00]".
pub fn format_position_label(pos: &HorizontalPosition) -> String {
    format!(
        "[{},{}]",
        format_two_decimals(pos.y),
        format_two_decimals(pos.x)
    )
}
