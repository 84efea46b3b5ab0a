//! Driver roster model.
//!
//! A driver is a roster entry with a qualification list (the train numbers
//! they may operate) and a cumulative travel-time accumulator used as the
//! load-balancing key. Roster order is significant: on equal accumulated
//! time the engine picks the driver that appears first.

use serde::{Deserialize, Serialize};

use super::{DriverId, TrainNumber};

/// A roster entry for one crew operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique driver identifier.
    pub id: DriverId,
    /// Display name, opaque to the assignment algorithm.
    pub name: String,
    /// Cumulative assigned travel time (ms), layovers excluded.
    pub assigned_ms: i64,
    /// Train numbers this driver is qualified to operate.
    pub qualified_trains: Vec<TrainNumber>,
}

impl Driver {
    /// Creates a driver with no qualifications and a zero accumulator.
    pub fn new(id: DriverId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            assigned_ms: 0,
            qualified_trains: Vec::new(),
        }
    }

    /// Adds one train qualification.
    pub fn with_qualification(mut self, train_number: TrainNumber) -> Self {
        self.qualified_trains.push(train_number);
        self
    }

    /// Sets the full qualification list.
    pub fn with_qualifications(mut self, train_numbers: Vec<TrainNumber>) -> Self {
        self.qualified_trains = train_numbers;
        self
    }

    /// Seeds the accumulator (normally left at zero).
    pub fn with_assigned_ms(mut self, assigned_ms: i64) -> Self {
        self.assigned_ms = assigned_ms;
        self
    }

    /// Whether this driver may operate the given train.
    pub fn is_qualified_for(&self, train_number: TrainNumber) -> bool {
        self.qualified_trains.contains(&train_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hours_ms;

    #[test]
    fn test_driver_builder() {
        let d = Driver::new(3, "Vasily").with_qualifications(vec![51, 72, 80]);
        assert_eq!(d.id, 3);
        assert_eq!(d.name, "Vasily");
        assert_eq!(d.assigned_ms, 0);
        assert!(d.is_qualified_for(72));
        assert!(!d.is_qualified_for(120));
    }

    #[test]
    fn test_single_qualification() {
        let d = Driver::new(1, "Ivan")
            .with_qualification(120)
            .with_qualification(92);
        assert_eq!(d.qualified_trains, vec![120, 92]);
    }

    #[test]
    fn test_seeded_accumulator() {
        let d = Driver::new(5, "Semyon").with_assigned_ms(hours_ms(10));
        assert_eq!(d.assigned_ms, hours_ms(10));
    }
}
