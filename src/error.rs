//! Scheduler precondition errors.
//!
//! The scheduler rejects batches that violate its input contract before
//! simulating anything. These are caller bugs, not runtime conditions to
//! recover from: a front end is expected to run [`validate_batch`] first.
//!
//! [`validate_batch`]: crate::validation::validate_batch

use std::fmt;

/// Error returned by [`schedule`](crate::scheduler::schedule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleError {
    /// Error category.
    pub kind: ScheduleErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of precondition violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleErrorKind {
    /// A process has an empty id, negative arrival, or non-positive burst.
    InvalidProcess,
    /// No processes were supplied.
    EmptyBatch,
}

impl ScheduleError {
    pub(crate) fn new(kind: ScheduleErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns true if a process record was malformed.
    pub fn is_invalid_process(&self) -> bool {
        self.kind == ScheduleErrorKind::InvalidProcess
    }

    /// Returns true if the batch was empty.
    pub fn is_empty_batch(&self) -> bool {
        self.kind == ScheduleErrorKind::EmptyBatch
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ScheduleError {}
