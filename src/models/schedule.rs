//! Schedule (result) model.
//!
//! A schedule result lists every process of a batch in completion order,
//! annotated with its completion, turnaround, and waiting times, plus the
//! batch averages.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::{Algorithm, Process};
use crate::scheduler::metrics;

/// A process annotated with the timing metrics of one scheduling run.
///
/// Invariants (for valid input):
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time`
/// - `waiting_time >= 0`, `turnaround_time >= burst_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time (never modified by scheduling).
    pub burst_time: i64,
    /// Instant execution finished.
    pub completion_time: i64,
    /// Total time in the system (completion - arrival).
    pub turnaround_time: i64,
    /// Time spent eligible but not running (turnaround - burst).
    pub waiting_time: i64,
}

impl ScheduledProcess {
    /// Annotates `process` as finishing at `completion_time`.
    pub fn complete(process: &Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }

    /// Instant execution started (completion - burst).
    #[inline]
    pub fn start_time(&self) -> i64 {
        self.completion_time - self.burst_time
    }
}

/// One interval of the CPU timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineSlot {
    /// No process was eligible; the CPU sat idle over `[start, end)`.
    Idle { start: i64, end: i64 },
    /// Process `id` ran over `[start, end)`.
    Run { id: String, start: i64, end: i64 },
}

impl TimelineSlot {
    /// Slot start time.
    pub fn start(&self) -> i64 {
        match self {
            TimelineSlot::Idle { start, .. } | TimelineSlot::Run { start, .. } => *start,
        }
    }

    /// Slot end time.
    pub fn end(&self) -> i64 {
        match self {
            TimelineSlot::Idle { end, .. } | TimelineSlot::Run { end, .. } => *end,
        }
    }

    /// Slot length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end() - self.start()
    }
}

/// Result of scheduling one batch of processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Algorithm that produced this schedule.
    pub algorithm: Algorithm,
    /// Scheduled processes in completion order.
    pub processes: Vec<ScheduledProcess>,
    /// Mean waiting time (unrounded).
    pub average_waiting_time: f64,
    /// Mean turnaround time (unrounded).
    pub average_turnaround_time: f64,
}

impl ScheduleResult {
    /// Builds a result from processes already in completion order.
    pub fn new(algorithm: Algorithm, processes: Vec<ScheduledProcess>) -> Self {
        let average_waiting_time = metrics::mean(processes.iter().map(|p| p.waiting_time));
        let average_turnaround_time = metrics::mean(processes.iter().map(|p| p.turnaround_time));
        Self {
            algorithm,
            processes,
            average_waiting_time,
            average_turnaround_time,
        }
    }

    /// Mean waiting time rounded half-up to one decimal place.
    pub fn rounded_average_waiting_time(&self) -> f64 {
        metrics::mean_rounded(self.processes.iter().map(|p| p.waiting_time))
    }

    /// Mean turnaround time rounded half-up to one decimal place.
    pub fn rounded_average_turnaround_time(&self) -> f64 {
        metrics::mean_rounded(self.processes.iter().map(|p| p.turnaround_time))
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the result holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Finds a scheduled process by ID.
    pub fn get(&self, id: &str) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Process IDs in execution (= completion) order.
    pub fn execution_order(&self) -> Vec<&str> {
        self.processes.iter().map(|p| p.id.as_str()).collect()
    }

    /// Completion time of the last process (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total CPU idle time over `[0, makespan)`.
    pub fn total_idle_time(&self) -> i64 {
        let busy: i64 = self.processes.iter().map(|p| p.burst_time).sum();
        self.makespan() - busy
    }

    /// Gantt-style timeline covering `[0, makespan)`, with idle gaps made explicit.
    pub fn timeline(&self) -> Vec<TimelineSlot> {
        let mut slots = Vec::with_capacity(self.processes.len() * 2);
        let mut clock = 0;

        for p in &self.processes {
            let start = p.start_time();
            if start > clock {
                slots.push(TimelineSlot::Idle {
                    start: clock,
                    end: start,
                });
            }
            slots.push(TimelineSlot::Run {
                id: p.id.clone(),
                start,
                end: p.completion_time,
            });
            clock = p.completion_time;
        }

        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScheduleResult {
        // P1 idles until 2, P2 follows immediately.
        ScheduleResult::new(
            Algorithm::Fcfs,
            vec![
                ScheduledProcess::complete(&Process::new("P1", 2, 3), 5),
                ScheduledProcess::complete(&Process::new("P2", 3, 4), 9),
            ],
        )
    }

    #[test]
    fn test_complete_derives_metrics() {
        let sp = ScheduledProcess::complete(&Process::new("P2", 1, 3), 8);
        assert_eq!(sp.completion_time, 8);
        assert_eq!(sp.turnaround_time, 7);
        assert_eq!(sp.waiting_time, 4);
        assert_eq!(sp.start_time(), 5);
    }

    #[test]
    fn test_result_queries() {
        let r = sample();
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert_eq!(r.execution_order(), vec!["P1", "P2"]);
        assert_eq!(r.makespan(), 9);
        assert_eq!(r.total_idle_time(), 2);
        assert_eq!(r.get("P2").map(|p| p.waiting_time), Some(2));
        assert!(r.get("P9").is_none());
    }

    #[test]
    fn test_averages() {
        let r = sample();
        // WT: 0, 2 → 1.0; TAT: 3, 6 → 4.5
        assert!((r.average_waiting_time - 1.0).abs() < 1e-10);
        assert!((r.average_turnaround_time - 4.5).abs() < 1e-10);
        assert!((r.rounded_average_turnaround_time() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_timeline_with_idle_gap() {
        let slots = sample().timeline();
        assert_eq!(
            slots,
            vec![
                TimelineSlot::Idle { start: 0, end: 2 },
                TimelineSlot::Run {
                    id: "P1".into(),
                    start: 2,
                    end: 5,
                },
                TimelineSlot::Run {
                    id: "P2".into(),
                    start: 5,
                    end: 9,
                },
            ]
        );
        assert_eq!(slots[0].duration(), 2);
    }

    #[test]
    fn test_empty_result() {
        let r = ScheduleResult::new(Algorithm::Sjf, Vec::new());
        assert!(r.is_empty());
        assert_eq!(r.makespan(), 0);
        assert_eq!(r.average_waiting_time, 0.0);
        assert!(r.timeline().is_empty());
    }

    #[test]
    fn test_result_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["algorithm"], "FCFS");
        assert_eq!(json["processes"][1]["completion_time"], 9);
    }
}
