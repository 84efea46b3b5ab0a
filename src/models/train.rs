//! Train reference data.
//!
//! Trains are immutable catalog entries: a number and the display name of
//! the direction they serve. The assignment engine never reads the catalog;
//! it exists for input validation and for the report layer.

use serde::{Deserialize, Serialize};

use super::TrainNumber;

/// A catalog entry for one train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    /// Train number, unique within the catalog.
    pub number: TrainNumber,
    /// Display name of the direction served (e.g. "Moscow").
    pub direction: String,
}

impl Train {
    /// Creates a new catalog entry.
    pub fn new(number: TrainNumber, direction: impl Into<String>) -> Self {
        Self {
            number,
            direction: direction.into(),
        }
    }
}

/// Static lookup of trains by number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainCatalog {
    trains: Vec<Train>,
}

impl TrainCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from a list of trains.
    pub fn from_trains(trains: Vec<Train>) -> Self {
        Self { trains }
    }

    /// Adds a train.
    pub fn with_train(mut self, train: Train) -> Self {
        self.trains.push(train);
        self
    }

    /// Finds a train by number.
    pub fn get(&self, number: TrainNumber) -> Option<&Train> {
        self.trains.iter().find(|t| t.number == number)
    }

    /// Whether the catalog knows this train number.
    pub fn contains(&self, number: TrainNumber) -> bool {
        self.get(number).is_some()
    }

    /// Direction display name for a train number, if known.
    pub fn direction_of(&self, number: TrainNumber) -> Option<&str> {
        self.get(number).map(|t| t.direction.as_str())
    }

    /// All catalog entries, in insertion order.
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}
