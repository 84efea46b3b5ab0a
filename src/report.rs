//! Text rendering of an assigned departure grid.
//!
//! Formats schedule lines (train, direction, departure and return
//! instants, driver) and per-driver workload totals. Lookups are lenient:
//! an unassigned run renders as `unassigned` and an unknown train number
//! as `unknown`, since partial assignment is a legitimate engine outcome.

use chrono::DateTime;

use crate::models::{Driver, TrainCatalog, TrainRun, MS_PER_HOUR, MS_PER_MINUTE};

/// Placeholder shown for runs without a driver.
pub const UNASSIGNED: &str = "unassigned";

/// Formats a duration as `H:MM` (minutes zero-padded, hours unpadded).
pub fn format_duration_hm(ms: i64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    format!("{hours}:{minutes:02}")
}

/// Formats an epoch-ms instant as `DD.MM.YYYY HH:MM` (UTC).
///
/// Falls back to the raw millisecond value for out-of-range instants.
pub fn format_instant(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => format!("{ms}ms"),
    }
}

/// Renders one line per run: id, train, direction, departure, return,
/// and the assigned driver's name.
pub fn schedule_lines(
    runs: &[TrainRun],
    catalog: &TrainCatalog,
    drivers: &[Driver],
) -> Vec<String> {
    runs.iter()
        .map(|run| {
            let direction = catalog.direction_of(run.train_number).unwrap_or("unknown");
            let driver_name = run
                .assigned_driver
                .and_then(|id| drivers.iter().find(|d| d.id == id))
                .map(|d| d.name.as_str())
                .unwrap_or(UNASSIGNED);
            format!(
                "{:3}. train {:3} to {:16} dep {} ret {} driver: {}",
                run.id,
                run.train_number,
                direction,
                format_instant(run.start_ms),
                format_instant(run.return_time_ms()),
                driver_name,
            )
        })
        .collect()
}

/// Renders one `name: H:MM` line per roster entry.
pub fn workload_lines(drivers: &[Driver]) -> Vec<String> {
    drivers
        .iter()
        .map(|d| format!("{}: {}", d.name, format_duration_hm(d.assigned_ms)))
        .collect()
}
