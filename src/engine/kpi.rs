//! Roster quality metrics.
//!
//! Computes coverage and workload-balance indicators from a departure
//! grid after an assignment pass.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage | Fraction of runs with a driver |
//! | Unassigned Count | Runs left without a driver |
//! | Workload by Driver | Accumulated travel time per roster entry |
//! | Workload Spread | max - min accumulated travel time |

use std::collections::HashMap;

use crate::models::{Driver, DriverId, TrainRun};

/// Coverage and workload indicators for an assigned departure grid.
///
/// All time values are in milliseconds.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Total runs in the grid.
    pub total_runs: usize,
    /// Runs with an assigned driver.
    pub assigned_runs: usize,
    /// Runs without a driver.
    pub unassigned_runs: usize,
    /// Fraction of runs covered (1.0 for an empty grid).
    pub coverage: f64,
    /// Accumulated travel time per driver (ms).
    pub workload_by_driver: HashMap<DriverId, i64>,
    /// Largest single accumulator (ms).
    pub max_workload_ms: i64,
    /// Smallest single accumulator (ms).
    pub min_workload_ms: i64,
}

impl RosterKpi {
    /// Computes KPIs from a grid and its roster.
    pub fn calculate(runs: &[TrainRun], drivers: &[Driver]) -> Self {
        let total_runs = runs.len();
        let assigned_runs = runs.iter().filter(|r| r.is_assigned()).count();
        let unassigned_runs = total_runs - assigned_runs;
        let coverage = if total_runs == 0 {
            1.0
        } else {
            assigned_runs as f64 / total_runs as f64
        };

        let workload_by_driver: HashMap<DriverId, i64> =
            drivers.iter().map(|d| (d.id, d.assigned_ms)).collect();
        let max_workload_ms = drivers.iter().map(|d| d.assigned_ms).max().unwrap_or(0);
        let min_workload_ms = drivers.iter().map(|d| d.assigned_ms).min().unwrap_or(0);

        Self {
            total_runs,
            assigned_runs,
            unassigned_runs,
            coverage,
            workload_by_driver,
            max_workload_ms,
            min_workload_ms,
        }
    }

    /// Gap between the most and least loaded drivers (ms).
    pub fn workload_spread_ms(&self) -> i64 {
        self.max_workload_ms - self.min_workload_ms
    }

    /// Whether every run received a driver.
    pub fn fully_covered(&self) -> bool {
        self.unassigned_runs == 0
    }
}
