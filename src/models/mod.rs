//! Rostering domain models.
//!
//! Provides the core data types for representing a departure grid and a
//! driver roster. All times are `i64` milliseconds: instants are relative
//! to an epoch the consumer defines, durations are plain millisecond
//! counts.

mod driver;
mod run;
mod train;
mod window;

pub use driver::Driver;
pub use run::TrainRun;
pub use train::{Train, TrainCatalog};
pub use window::TimeWindow;

/// Unique driver identifier.
pub type DriverId = u32;

/// Unique train-run identifier within a departure grid.
pub type RunId = u32;

/// Train number, the key into the train catalog.
pub type TrainNumber = u32;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60 * 1000;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Converts whole hours to milliseconds.
#[inline]
pub fn hours_ms(hours: i64) -> i64 {
    hours * MS_PER_HOUR
}

/// Converts whole minutes to milliseconds.
#[inline]
pub fn minutes_ms(minutes: i64) -> i64 {
    minutes * MS_PER_MINUTE
}
