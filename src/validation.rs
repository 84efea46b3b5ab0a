//! Input validation for rostering data.
//!
//! Checks structural integrity of the departure grid, the roster, and the
//! train catalog before assignment. The engine itself assumes validated
//! input; rejecting malformed data is the loader's job. Detects:
//! - Duplicate IDs (runs, drivers, catalog entries)
//! - Negative durations
//! - Train numbers absent from the catalog
//! - Pre-assigned runs referencing unknown drivers
//! - An empty roster

use std::collections::HashSet;

use crate::models::{Driver, TrainCatalog, TrainRun};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A run or qualification references a train number not in the catalog.
    UnknownTrain,
    /// A pre-assigned run references a driver not in the roster.
    UnknownDriver,
    /// A run carries a negative duration.
    NegativeDuration,
    /// The roster has no drivers.
    EmptyRoster,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates rostering input data.
///
/// Checks:
/// 1. No duplicate catalog train numbers
/// 2. No duplicate run IDs
/// 3. No duplicate driver IDs
/// 4. Roster is non-empty
/// 5. All run durations are non-negative
/// 6. Every run's train number exists in the catalog
/// 7. Every qualification names a catalog train
/// 8. Every pre-assigned run references a roster driver
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    runs: &[TrainRun],
    drivers: &[Driver],
    catalog: &TrainCatalog,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut train_numbers = HashSet::new();
    for train in catalog.trains() {
        if !train_numbers.insert(train.number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate catalog train number: {}", train.number),
            ));
        }
    }

    if drivers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster contains no drivers",
        ));
    }

    let mut driver_ids = HashSet::new();
    for driver in drivers {
        if !driver_ids.insert(driver.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate driver ID: {}", driver.id),
            ));
        }
        for &number in &driver.qualified_trains {
            if !train_numbers.contains(&number) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTrain,
                    format!(
                        "Driver {} is qualified for unknown train {}",
                        driver.id, number
                    ),
                ));
            }
        }
    }

    let mut run_ids = HashSet::new();
    for run in runs {
        if !run_ids.insert(run.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate run ID: {}", run.id),
            ));
        }

        if run.outbound_ms < 0 || run.layover_ms < 0 || run.return_ms < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("Run {} has a negative duration", run.id),
            ));
        }

        if !train_numbers.contains(&run.train_number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTrain,
                format!(
                    "Run {} references unknown train {}",
                    run.id, run.train_number
                ),
            ));
        }

        if let Some(driver_id) = run.assigned_driver {
            if !driver_ids.contains(&driver_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDriver,
                    format!("Run {} is assigned to unknown driver {}", run.id, driver_id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
