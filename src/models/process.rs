//! Process model.
//!
//! A process is a single schedulable unit of CPU work. It becomes eligible
//! at its arrival time and, once dispatched, runs for its whole burst
//! without interruption.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// A process waiting to be scheduled.
///
/// Carries only caller-supplied data. Timing metrics are attached by the
/// scheduler, which turns each `Process` into a [`ScheduledProcess`].
///
/// # Time Representation
/// Times are abstract integer ticks relative to t=0.
///
/// [`ScheduledProcess`]: super::ScheduledProcess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g., "P1").
    pub id: String,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Uninterrupted execution time required.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn is_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Whether the record satisfies the scheduler's structural preconditions:
    /// non-empty id, arrival ≥ 0, burst > 0.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && self.arrival_time >= 0 && self.burst_time > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("P1", 2, 5);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 5);
    }

    #[test]
    fn test_is_arrived() {
        let p = Process::new("P1", 3, 1);
        assert!(!p.is_arrived(2));
        assert!(p.is_arrived(3));
        assert!(p.is_arrived(10));
    }

    #[test]
    fn test_well_formed() {
        assert!(Process::new("P1", 0, 1).is_well_formed());
        assert!(!Process::new("", 0, 1).is_well_formed());
        assert!(!Process::new("  ", 0, 1).is_well_formed());
        assert!(!Process::new("P1", -1, 1).is_well_formed());
        assert!(!Process::new("P1", 0, 0).is_well_formed());
    }

    #[test]
    fn test_process_json() {
        let p: Process =
            serde_json::from_str(r#"{"id":"P7","arrival_time":4,"burst_time":9}"#).unwrap();
        assert_eq!(p, Process::new("P7", 4, 9));
    }
}
