//! Greedy driver assignment.
//!
//! # Algorithm
//!
//! 1. Walk the run list in its given order (never re-sorted; results are
//!    order-dependent and deliberately so).
//! 2. Skip runs that already have a driver.
//! 3. Collect the ids of drivers busy or resting at the run's departure
//!    instant by scanning every already-assigned run's occupied window.
//! 4. Filter the roster to rested drivers qualified for the run's train.
//! 5. Assign the one with the least accumulated travel time (first in
//!    roster order on ties) and charge it the outbound + return time.
//!
//! A run with no eligible driver keeps `assigned_driver == None`. That is
//! a legitimate outcome the report layer must display, not an error.
//!
//! # Complexity
//! O(n²) in runs plus O(n·m) in drivers. The grid is tens to low hundreds
//! of runs, so the repeated busy-set scan beats maintaining a per-driver
//! interval index.

use std::collections::HashSet;

use log::debug;

use crate::models::{Driver, DriverId, RunId, TrainRun};

/// Outcome counters for one assignment pass.
///
/// Informational only: the pass communicates its real result by mutating
/// the run list and the roster in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentSummary {
    /// Runs that received a driver during this pass.
    pub assigned: usize,
    /// Runs skipped because they already had a driver.
    pub skipped: usize,
    /// Runs left without a driver, in processing order.
    pub unassigned_run_ids: Vec<RunId>,
}

/// Single-pass greedy driver assignment.
///
/// Stateless between calls: the caller owns the run list and the roster
/// and threads them through explicitly.
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    mandatory_rest_ms: i64,
}

impl AssignmentEngine {
    /// Compulsory post-duty rest before a driver may take a new departure.
    pub const DEFAULT_MANDATORY_REST_MS: i64 = 16 * 60 * 60 * 1000;

    /// Creates an engine with the default 16-hour mandatory rest.
    pub fn new() -> Self {
        Self {
            mandatory_rest_ms: Self::DEFAULT_MANDATORY_REST_MS,
        }
    }

    /// Overrides the mandatory rest period.
    pub fn with_mandatory_rest_ms(mut self, mandatory_rest_ms: i64) -> Self {
        self.mandatory_rest_ms = mandatory_rest_ms;
        self
    }

    /// Configured mandatory rest period (ms).
    pub fn mandatory_rest_ms(&self) -> i64 {
        self.mandatory_rest_ms
    }

    /// Ids of drivers busy or resting at `time_ms`.
    ///
    /// A driver is busy when some assigned run's occupied window (round
    /// trip plus mandatory rest, endpoints inclusive) contains the
    /// instant. Unassigned runs contribute nothing.
    pub fn busy_driver_ids(&self, runs: &[TrainRun], time_ms: i64) -> HashSet<DriverId> {
        runs.iter()
            .filter_map(|run| {
                let driver_id = run.assigned_driver?;
                run.occupied_window(self.mandatory_rest_ms)
                    .contains(time_ms)
                    .then_some(driver_id)
            })
            .collect()
    }

    /// Fills the departure grid with drivers, in run-list order.
    ///
    /// Mutates both inputs: each processed run either receives a driver id
    /// or stays `None`, and each chosen driver's accumulator grows by the
    /// run's travel time (layover excluded). Already-assigned runs are
    /// never touched, so re-running the pass over its own output is a
    /// no-op.
    ///
    /// Greedy and order-dependent by policy: each run sees only the
    /// assignments made before it, and no choice is ever revisited, so a
    /// feasible grid can still end up partially unassigned.
    pub fn assign(&self, runs: &mut [TrainRun], drivers: &mut [Driver]) -> AssignmentSummary {
        let mut summary = AssignmentSummary::default();

        for i in 0..runs.len() {
            if runs[i].is_assigned() {
                summary.skipped += 1;
                continue;
            }

            let busy = self.busy_driver_ids(runs, runs[i].start_ms);
            let run = &runs[i];

            // Stable minimum scan: strictly-smaller replaces, so the first
            // of several equally loaded drivers wins.
            let mut chosen: Option<usize> = None;
            for (idx, driver) in drivers.iter().enumerate() {
                if busy.contains(&driver.id) || !driver.is_qualified_for(run.train_number) {
                    continue;
                }
                let better = match chosen {
                    Some(best) => driver.assigned_ms < drivers[best].assigned_ms,
                    None => true,
                };
                if better {
                    chosen = Some(idx);
                }
            }

            match chosen {
                Some(idx) => {
                    let worked = runs[i].worked_ms();
                    let driver = &mut drivers[idx];
                    runs[i].assigned_driver = Some(driver.id);
                    driver.assigned_ms += worked;
                    summary.assigned += 1;
                    debug!(
                        "run {} (train {}): assigned driver {} ({}), workload now {}ms",
                        runs[i].id, runs[i].train_number, driver.id, driver.name, driver.assigned_ms
                    );
                }
                None => {
                    summary.unassigned_run_ids.push(runs[i].id);
                    debug!(
                        "run {} (train {}): no eligible driver at {}ms",
                        runs[i].id, runs[i].train_number, runs[i].start_ms
                    );
                }
            }
        }

        summary
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{hours_ms, TimeWindow};

    fn make_run(id: RunId, train: u32, start_hours: i64) -> TrainRun {
        TrainRun::new(id, train, hours_ms(start_hours))
            .with_outbound_ms(hours_ms(8))
            .with_layover_ms(hours_ms(6))
            .with_return_ms(hours_ms(8))
    }

    #[test]
    fn test_single_run_single_driver() {
        let mut runs = vec![make_run(1, 120, 0)];
        let mut drivers = vec![Driver::new(1, "D1").with_qualification(120)];

        let summary = AssignmentEngine::new().assign(&mut runs, &mut drivers);

        assert_eq!(summary.assigned, 1);
        assert!(summary.unassigned_run_ids.is_empty());
        assert_eq!(runs[0].assigned_driver, Some(1));
        assert_eq!(drivers[0].assigned_ms, hours_ms(16));
    }

    #[test]
    fn test_rest_window_blocks_second_run() {
        // R1: start T0, 8h out + 6h layover + 8h back + 16h rest = busy
        // through T0+38h. R2 departs at T0+30h, inside the window, and D1
        // is the only qualified driver.
        let mut runs = vec![make_run(1, 120, 0), make_run(2, 120, 30)];
        let mut drivers = vec![Driver::new(1, "D1").with_qualification(120)];

        let summary = AssignmentEngine::new().assign(&mut runs, &mut drivers);

        assert_eq!(runs[0].assigned_driver, Some(1));
        assert_eq!(runs[1].assigned_driver, None);
        assert_eq!(summary.assigned, 1);
        assert_eq!(summary.unassigned_run_ids, vec![2]);
        assert_eq!(drivers[0].assigned_ms, hours_ms(16));
    }

    #[test]
    fn test_rested_driver_is_eligible_again() {
        // Second run departs at T0+39h, one hour past the 38h window end.
        let mut runs = vec![make_run(1, 120, 0), make_run(2, 120, 39)];
        let mut drivers = vec![Driver::new(1, "D1").with_qualification(120)];

        AssignmentEngine::new().assign(&mut runs, &mut drivers);

        assert_eq!(runs[0].assigned_driver, Some(1));
        assert_eq!(runs[1].assigned_driver, Some(1));
        assert_eq!(drivers[0].assigned_ms, hours_ms(32));
    }

    #[test]
    fn test_busy_set_is_endpoint_inclusive() {
        // Window end is exactly T0+38h; a departure at that instant is
        // still blocked.
        let mut runs = vec![make_run(1, 120, 0), make_run(2, 120, 38)];
        let mut drivers = vec![Driver::new(1, "D1").with_qualification(120)];

        AssignmentEngine::new().assign(&mut runs, &mut drivers);

        assert_eq!(runs[1].assigned_driver, None);
    }

    #[test]
    fn test_unqualified_roster_leaves_runs_unassigned() {
        // Single driver qualified only for train 14; two non-overlapping
        // runs for train 120 both stay unassigned.
        let mut runs = vec![make_run(1, 120, 0), make_run(2, 120, 100)];
        let mut drivers = vec![Driver::new(1, "D1").with_qualification(14)];

        let summary = AssignmentEngine::new().assign(&mut runs, &mut drivers);

        assert_eq!(summary.assigned, 0);
        assert_eq!(summary.unassigned_run_ids, vec![1, 2]);
        assert!(runs.iter().all(|r| r.assigned_driver.is_none()));
        assert_eq!(drivers[0].assigned_ms, 0);
    }

    #[test]
    fn test_least_loaded_driver_wins() {
        let mut runs = vec![make_run(1, 120, 0)];
        let mut drivers = vec![
            Driver::new(1, "Loaded")
                .with_qualification(120)
                .with_assigned_ms(hours_ms(20)),
            Driver::new(2, "Fresh").with_qualification(120),
        ];

        AssignmentEngine::new().assign(&mut runs, &mut drivers);

        assert_eq!(runs[0].assigned_driver, Some(2));
    }

    #[test]
    fn test_tie_breaks_by_roster_order() {
        let mut runs = vec![make_run(1, 120, 0)];
        let mut drivers = vec![
            Driver::new(7, "First").with_qualification(120),
            Driver::new(2, "Second").with_qualification(120),
        ];

        AssignmentEngine::new().assign(&mut runs, &mut drivers);

        // Equal accumulators: roster position, not id, decides.
        assert_eq!(runs[0].assigned_driver, Some(7));
    }

    #[test]
    fn test_workload_balances_across_roster() {
        // Far-apart runs of the same train alternate between two drivers.
        let mut runs = vec![
            make_run(1, 120, 0),
            make_run(2, 120, 100),
            make_run(3, 120, 200),
            make_run(4, 120, 300),
        ];
        let mut drivers = vec![
            Driver::new(1, "A").with_qualification(120),
            Driver::new(2, "B").with_qualification(120),
        ];

        AssignmentEngine::new().assign(&mut runs, &mut drivers);

        assert_eq!(runs[0].assigned_driver, Some(1));
        assert_eq!(runs[1].assigned_driver, Some(2));
        assert_eq!(runs[2].assigned_driver, Some(1));
        assert_eq!(runs[3].assigned_driver, Some(2));
        assert_eq!(drivers[0].assigned_ms, hours_ms(32));
        assert_eq!(drivers[1].assigned_ms, hours_ms(32));
    }

    #[test]
    fn test_second_pass_is_a_noop() {
        let mut runs = vec![make_run(1, 120, 0), make_run(2, 120, 100)];
        let mut drivers = vec![Driver::new(1, "D1").with_qualification(120)];
        let engine = AssignmentEngine::new();

        engine.assign(&mut runs, &mut drivers);
        let runs_before = runs.clone();
        let drivers_before = drivers.clone();

        let second = engine.assign(&mut runs, &mut drivers);

        assert_eq!(second.assigned, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(runs, runs_before);
        assert_eq!(drivers, drivers_before);
    }

    #[test]
    fn test_preassigned_run_is_skipped_but_occupies_driver() {
        // Run 1 arrives pre-assigned; its window must still block driver 1
        // for run 2, and its travel time must not be re-charged.
        let mut runs = vec![make_run(1, 120, 0).with_driver(1), make_run(2, 120, 30)];
        let mut drivers = vec![
            Driver::new(1, "D1").with_qualification(120),
            Driver::new(2, "D2").with_qualification(120),
        ];

        let summary = AssignmentEngine::new().assign(&mut runs, &mut drivers);

        assert_eq!(summary.skipped, 1);
        assert_eq!(drivers[0].assigned_ms, 0);
        assert_eq!(runs[1].assigned_driver, Some(2));
    }

    #[test]
    fn test_accumulator_matches_assigned_runs() {
        let mut runs = vec![
            make_run(1, 120, 0).with_outbound_ms(hours_ms(8) + 1500),
            make_run(2, 14, 100),
            make_run(3, 120, 200),
        ];
        let mut drivers = vec![
            Driver::new(1, "A").with_qualifications(vec![120, 14]),
            Driver::new(2, "B").with_qualification(14),
        ];

        AssignmentEngine::new().assign(&mut runs, &mut drivers);

        for driver in &drivers {
            let expected: i64 = runs
                .iter()
                .filter(|r| r.assigned_driver == Some(driver.id))
                .map(|r| r.worked_ms())
                .sum();
            assert_eq!(driver.assigned_ms, expected, "driver {}", driver.id);
        }
    }

    #[test]
    fn test_no_overlapping_windows_per_driver() {
        // Chronological grid over several trains; after the pass no driver
        // may hold two runs with intersecting occupied windows.
        let mut runs = vec![
            make_run(1, 120, 0),
            make_run(2, 14, 6),
            make_run(3, 120, 20),
            make_run(4, 14, 45),
            make_run(5, 120, 50),
            make_run(6, 120, 90),
        ];
        let mut drivers = vec![
            Driver::new(1, "A").with_qualifications(vec![120, 14]),
            Driver::new(2, "B").with_qualification(120),
            Driver::new(3, "C").with_qualification(14),
        ];
        let engine = AssignmentEngine::new();

        engine.assign(&mut runs, &mut drivers);

        let rest = engine.mandatory_rest_ms();
        for a in &runs {
            for b in &runs {
                if a.id >= b.id || a.assigned_driver.is_none() {
                    continue;
                }
                if a.assigned_driver == b.assigned_driver {
                    let wa: TimeWindow = a.occupied_window(rest);
                    let wb: TimeWindow = b.occupied_window(rest);
                    assert!(!wa.overlaps(&wb), "runs {} and {} overlap", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn test_assigned_drivers_are_qualified() {
        let mut runs = vec![make_run(1, 120, 0), make_run(2, 14, 50), make_run(3, 92, 90)];
        let mut drivers = vec![
            Driver::new(1, "A").with_qualifications(vec![120, 92]),
            Driver::new(2, "B").with_qualification(14),
        ];

        AssignmentEngine::new().assign(&mut runs, &mut drivers);

        for run in runs.iter().filter(|r| r.is_assigned()) {
            let driver = drivers
                .iter()
                .find(|d| Some(d.id) == run.assigned_driver)
                .unwrap();
            assert!(driver.is_qualified_for(run.train_number));
        }
    }

    #[test]
    fn test_custom_rest_period() {
        // With zero mandatory rest the driver frees up right after the
        // round trip (22h), window end inclusive.
        let mut runs = vec![make_run(1, 120, 0), make_run(2, 120, 23)];
        let mut drivers = vec![Driver::new(1, "D1").with_qualification(120)];
        let engine = AssignmentEngine::new().with_mandatory_rest_ms(0);

        engine.assign(&mut runs, &mut drivers);

        assert_eq!(runs[1].assigned_driver, Some(1));
    }

    #[test]
    fn test_busy_driver_ids() {
        let engine = AssignmentEngine::new();
        let runs = vec![
            make_run(1, 120, 0).with_driver(1),
            make_run(2, 14, 10).with_driver(2),
            make_run(3, 92, 500), // unassigned, never busy
        ];

        let busy = engine.busy_driver_ids(&runs, hours_ms(12));
        assert!(busy.contains(&1));
        assert!(busy.contains(&2));
        assert_eq!(busy.len(), 2);

        let later = engine.busy_driver_ids(&runs, hours_ms(100));
        assert!(later.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let engine = AssignmentEngine::new();

        let mut no_runs: Vec<TrainRun> = Vec::new();
        let mut drivers = vec![Driver::new(1, "D1").with_qualification(120)];
        assert_eq!(engine.assign(&mut no_runs, &mut drivers), AssignmentSummary::default());

        let mut runs = vec![make_run(1, 120, 0)];
        let mut no_drivers: Vec<Driver> = Vec::new();
        let summary = engine.assign(&mut runs, &mut no_drivers);
        assert_eq!(summary.unassigned_run_ids, vec![1]);
    }
}
