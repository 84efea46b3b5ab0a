//! Driver assignment engine and roster KPIs.
//!
//! The engine performs a single greedy pass over the departure grid,
//! assigning the least-loaded eligible driver to each unassigned run.
//! `kpi` computes coverage and workload metrics from the finished pass.
//!
//! # Usage
//!
//! ```
//! use crew_roster::engine::AssignmentEngine;
//! use crew_roster::models::{hours_ms, Driver, TrainRun};
//!
//! let mut runs = vec![TrainRun::new(1, 92, 0)
//!     .with_outbound_ms(hours_ms(5))
//!     .with_layover_ms(hours_ms(5))
//!     .with_return_ms(hours_ms(5))];
//! let mut drivers = vec![Driver::new(8, "Vyacheslav").with_qualification(92)];
//!
//! let engine = AssignmentEngine::new();
//! engine.assign(&mut runs, &mut drivers);
//! ```

mod assign;
mod kpi;

pub use assign::{AssignmentEngine, AssignmentSummary};
pub use kpi::RosterKpi;
