//! Fixed record layout shared by every sink
//!
//! Every line has the shape `<timestamp> - <LEVELNAME>: <message>`, with the
//! timestamp in local time and millisecond precision, e.g.
//! `2026-10-18 09:15:02,417 - INFO: ping`. The layout is not configurable.

use super::log_entry::LogEntry;

/// strftime layout of the timestamp column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Render a record without the trailing line break.
#[must_use]
pub fn format_record(entry: &LogEntry) -> String {
    format!(
        "{} - {}: {}",
        entry.timestamp.format(TIMESTAMP_FORMAT),
        entry.level.to_str(),
        entry.message
    )
}
