//! Input validation for process batches.
//!
//! Front ends run these checks before calling the scheduler, reporting
//! every problem at once instead of failing on the first. Detects:
//! - Batch size outside the configured bounds
//! - Empty process IDs
//! - Negative arrival times and non-positive burst times
//! - Duplicate IDs (and, optionally, duplicate arrival times)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process position (0-indexed), if the error concerns one process.
    pub index: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Too few or too many processes.
    BatchSize,
    /// A process ID is empty or whitespace.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// Two processes arrive at the same instant (only when required unique).
    DuplicateArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Batch constraints enforced by [`validate_batch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchLimits {
    /// Minimum number of processes.
    pub min_processes: usize,
    /// Maximum number of processes.
    pub max_processes: usize,
    /// Reject batches where two processes share an arrival time.
    pub unique_arrival_times: bool,
}

impl BatchLimits {
    /// Limits that only require a non-empty batch.
    pub fn unbounded() -> Self {
        Self {
            min_processes: 1,
            max_processes: usize::MAX,
            unique_arrival_times: false,
        }
    }

    /// Sets the allowed batch size range.
    pub fn with_size(mut self, min_processes: usize, max_processes: usize) -> Self {
        self.min_processes = min_processes;
        self.max_processes = max_processes;
        self
    }

    /// Requires arrival times to be distinct.
    pub fn with_unique_arrival_times(mut self, unique: bool) -> Self {
        self.unique_arrival_times = unique;
        self
    }
}

impl Default for BatchLimits {
    /// 3 to 10 processes, repeated arrival times allowed.
    fn default() -> Self {
        Self {
            min_processes: 3,
            max_processes: 10,
            unique_arrival_times: false,
        }
    }
}

/// Validates a batch of processes.
///
/// Checks:
/// 1. Batch size within `[min_processes, max_processes]`
/// 2. Every ID non-empty after trimming
/// 3. Every arrival time ≥ 0
/// 4. Every burst time > 0
/// 5. No duplicate IDs (trimmed)
/// 6. No duplicate arrival times, if `unique_arrival_times` is set
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process], limits: &BatchLimits) -> ValidationResult {
    let mut errors = Vec::new();

    let n = processes.len();
    if n < limits.min_processes || n > limits.max_processes {
        errors.push(ValidationError::new(
            ValidationErrorKind::BatchSize,
            None,
            if limits.max_processes == usize::MAX {
                format!(
                    "Expected at least {} processes, got {n}",
                    limits.min_processes
                )
            } else {
                format!(
                    "Expected between {} and {} processes, got {n}",
                    limits.min_processes, limits.max_processes
                )
            },
        ));
    }

    let mut ids = HashSet::new();
    let mut arrivals = HashSet::new();

    for (i, p) in processes.iter().enumerate() {
        let id = p.id.trim();
        let label = if id.is_empty() {
            format!("#{}", i + 1)
        } else {
            format!("'{id}'")
        };

        if id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                Some(i),
                format!("Process #{} has no ID", i + 1),
            ));
        } else if !ids.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                Some(i),
                format!("Duplicate process ID: {id}"),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                Some(i),
                format!(
                    "Process {label} has negative arrival time {}",
                    p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                Some(i),
                format!(
                    "Process {label} has non-positive burst time {}",
                    p.burst_time
                ),
            ));
        }

        if limits.unique_arrival_times && !arrivals.insert(p.arrival_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateArrival,
                Some(i),
                format!(
                    "Process {label} shares arrival time {} with another process",
                    p.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
