//! Train run model.
//!
//! A train run is one scheduled round trip: outbound travel, a layover at
//! the far end, and the return leg. Exactly one driver covers the whole
//! trip. The run starts unassigned and transitions at most once to an
//! assigned driver; it never transitions back.

use serde::{Deserialize, Serialize};

use super::{DriverId, RunId, TimeWindow, TrainNumber};

/// One scheduled round trip in the departure grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainRun {
    /// Unique run identifier, used for ordering and display only.
    pub id: RunId,
    /// Number of the train operating this run.
    pub train_number: TrainNumber,
    /// Assigned driver, `None` until the engine picks one.
    pub assigned_driver: Option<DriverId>,
    /// Departure instant (epoch ms).
    pub start_ms: i64,
    /// Outbound travel duration (ms).
    pub outbound_ms: i64,
    /// Layover at the destination before the return leg (ms).
    pub layover_ms: i64,
    /// Return travel duration (ms).
    pub return_ms: i64,
}

impl TrainRun {
    /// Creates an unassigned run with zero durations.
    pub fn new(id: RunId, train_number: TrainNumber, start_ms: i64) -> Self {
        Self {
            id,
            train_number,
            assigned_driver: None,
            start_ms,
            outbound_ms: 0,
            layover_ms: 0,
            return_ms: 0,
        }
    }

    /// Sets the outbound travel duration.
    pub fn with_outbound_ms(mut self, outbound_ms: i64) -> Self {
        self.outbound_ms = outbound_ms;
        self
    }

    /// Sets the destination layover duration.
    pub fn with_layover_ms(mut self, layover_ms: i64) -> Self {
        self.layover_ms = layover_ms;
        self
    }

    /// Sets the return travel duration.
    pub fn with_return_ms(mut self, return_ms: i64) -> Self {
        self.return_ms = return_ms;
        self
    }

    /// Pre-assigns a driver (e.g. when loading a partially filled grid).
    pub fn with_driver(mut self, driver_id: DriverId) -> Self {
        self.assigned_driver = Some(driver_id);
        self
    }

    /// Whether a driver has been assigned.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned_driver.is_some()
    }

    /// Full round-trip duration: outbound + layover + return (ms).
    #[inline]
    pub fn round_trip_ms(&self) -> i64 {
        self.outbound_ms + self.layover_ms + self.return_ms
    }

    /// Travel time counted toward the driver's workload (ms).
    ///
    /// The layover is explicitly excluded: only outbound and return legs
    /// count as worked time.
    #[inline]
    pub fn worked_ms(&self) -> i64 {
        self.outbound_ms + self.return_ms
    }

    /// Instant the train is back at the origin (epoch ms).
    #[inline]
    pub fn return_time_ms(&self) -> i64 {
        self.start_ms + self.round_trip_ms()
    }

    /// The interval during which the assigned driver is busy or resting.
    ///
    /// Spans departure through the round trip plus `mandatory_rest_ms` of
    /// compulsory post-duty rest, endpoints inclusive.
    pub fn occupied_window(&self, mandatory_rest_ms: i64) -> TimeWindow {
        TimeWindow::new(
            self.start_ms,
            self.start_ms + self.round_trip_ms() + mandatory_rest_ms,
        )
    }
}
