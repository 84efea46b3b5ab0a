//! Crew rostering for round-trip train runs.
//!
//! Assigns a single driver to each scheduled round-trip departure from a
//! fixed roster, subject to driver qualification and mandatory post-duty
//! rest, while balancing cumulative travel time across the roster.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Train`, `TrainCatalog`, `TrainRun`,
//!   `Driver`, `TimeWindow`
//! - **`engine`**: The greedy assignment pass and roster KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, negative
//!   durations, catalog references)
//! - **`report`**: Text rendering of the assigned departure grid and
//!   per-driver workload
//!
//! # Assignment Policy
//!
//! Runs are processed strictly in their given order. For each unassigned
//! run the engine computes the set of drivers busy or resting at the run's
//! departure instant, filters the roster down to rested drivers qualified
//! for the run's train, and picks the one with the least accumulated travel
//! time (first in roster order on ties). Runs with no eligible driver stay
//! unassigned — a legitimate terminal state, not an error. The pass is a
//! single greedy sweep: no backtracking, no reassignment, no feasibility
//! guarantee.
//!
//! # Example
//!
//! ```
//! use crew_roster::engine::AssignmentEngine;
//! use crew_roster::models::{hours_ms, Driver, TrainRun};
//!
//! let mut runs = vec![TrainRun::new(1, 120, 0)
//!     .with_outbound_ms(hours_ms(8))
//!     .with_layover_ms(hours_ms(6))
//!     .with_return_ms(hours_ms(8))];
//! let mut drivers = vec![Driver::new(1, "Ivan").with_qualification(120)];
//!
//! let summary = AssignmentEngine::new().assign(&mut runs, &mut drivers);
//! assert_eq!(summary.assigned, 1);
//! assert_eq!(runs[0].assigned_driver, Some(1));
//! assert_eq!(drivers[0].assigned_ms, hours_ms(16)); // layover excluded
//! ```

pub mod engine;
pub mod models;
pub mod report;
pub mod validation;
