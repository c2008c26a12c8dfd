//! Non-preemptive CPU schedulers and schedule metrics.
//!
//! [`schedule`] is the single entry point: it checks the batch against the
//! input contract, dispatches to the selected strategy, and wraps the
//! completion-ordered output in a [`ScheduleResult`] with averages.
//!
//! # Algorithms
//!
//! - **FCFS**: stable sort by arrival, then a single pass.
//! - **SJF**: greedy simulation picking the shortest arrived burst.
//!
//! Both are pure: no shared state, no I/O, safe to call from several
//! threads on disjoint inputs.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
pub mod metrics;
mod sjf;

pub use metrics::ScheduleMetrics;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ScheduleError, ScheduleErrorKind};
use crate::models::{Algorithm, Process, ScheduleResult};

/// Input container for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Algorithm to apply.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Processes to schedule, in submission order.
    pub processes: Vec<Process>,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>) -> Self {
        Self {
            algorithm,
            processes,
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Schedules this request.
    pub fn schedule(&self) -> Result<ScheduleResult, ScheduleError> {
        schedule(&self.processes, self.algorithm)
    }
}

/// Schedules `processes` with `algorithm`.
///
/// Returns every process annotated with completion, turnaround, and waiting
/// times, in completion order.
///
/// # Errors
/// - `EmptyBatch` if `processes` is empty.
/// - `InvalidProcess` if any process has an empty id, a negative arrival
///   time, or a non-positive burst time, or if a completion time would
///   exceed `i64::MAX`.
///
/// Duplicate ids are not detected; see [`validate_batch`].
///
/// # Example
/// ```
/// use cpu_schedule::models::{Algorithm, Process};
/// use cpu_schedule::scheduler::schedule;
///
/// let procs = vec![
///     Process::new("P1", 0, 5),
///     Process::new("P2", 1, 3),
///     Process::new("P3", 2, 8),
/// ];
/// let result = schedule(&procs, Algorithm::Fcfs).unwrap();
/// assert_eq!(result.rounded_average_waiting_time(), 3.3);
/// ```
///
/// [`validate_batch`]: crate::validation::validate_batch
pub fn schedule(
    processes: &[Process],
    algorithm: Algorithm,
) -> Result<ScheduleResult, ScheduleError> {
    check_preconditions(processes)?;

    let scheduled = match algorithm {
        Algorithm::Fcfs => fcfs::run(processes)?,
        Algorithm::Sjf => sjf::run(processes)?,
    };
    let result = ScheduleResult::new(algorithm, scheduled);

    debug!(
        %algorithm,
        processes = result.len(),
        makespan = result.makespan(),
        avg_waiting = result.average_waiting_time,
        avg_turnaround = result.average_turnaround_time,
        "schedule complete"
    );
    Ok(result)
}

fn check_preconditions(processes: &[Process]) -> Result<(), ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::new(
            ScheduleErrorKind::EmptyBatch,
            "cannot schedule an empty batch",
        ));
    }

    for (i, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            return Err(ScheduleError::new(
                ScheduleErrorKind::InvalidProcess,
                format!("process #{} has an empty id", i + 1),
            ));
        }
        if p.arrival_time < 0 {
            return Err(ScheduleError::new(
                ScheduleErrorKind::InvalidProcess,
                format!(
                    "process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
        if p.burst_time <= 0 {
            return Err(ScheduleError::new(
                ScheduleErrorKind::InvalidProcess,
                format!(
                    "process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    Ok(())
}

/// Completion time of `process` when dispatched at `start`.
fn completion_time(process: &Process, start: i64) -> Result<i64, ScheduleError> {
    start.checked_add(process.burst_time).ok_or_else(|| {
        ScheduleError::new(
            ScheduleErrorKind::InvalidProcess,
            format!(
                "process '{}' started at {start} would complete past the time limit",
                process.id
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::{random_batch, WorkloadSpec};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn completions(r: &ScheduleResult) -> Vec<i64> {
        r.processes.iter().map(|p| p.completion_time).collect()
    }

    fn waits(r: &ScheduleResult) -> Vec<i64> {
        r.processes.iter().map(|p| p.waiting_time).collect()
    }

    #[test]
    fn test_fcfs_textbook_batch() {
        let procs = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let r = schedule(&procs, Algorithm::Fcfs).unwrap();

        assert_eq!(r.execution_order(), vec!["P1", "P2", "P3"]);
        assert_eq!(completions(&r), vec![5, 8, 16]);
        assert_eq!(waits(&r), vec![0, 4, 6]);
        let tat: Vec<i64> = r.processes.iter().map(|p| p.turnaround_time).collect();
        assert_eq!(tat, vec![5, 7, 14]);
        assert_eq!(r.rounded_average_waiting_time(), 3.3);
        assert_eq!(r.rounded_average_turnaround_time(), 8.7);
    }

    #[test]
    fn test_sjf_textbook_batch() {
        let procs = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
            Process::new("P4", 3, 5),
        ];
        let r = schedule(&procs, Algorithm::Sjf).unwrap();

        assert_eq!(r.execution_order(), vec!["P1", "P2", "P4", "P3"]);
        assert_eq!(completions(&r), vec![8, 12, 17, 26]);
        // P3: TAT = 26 - 2 = 24, WT = 24 - 9 = 15
        assert_eq!(waits(&r), vec![0, 7, 9, 15]);
        assert!((r.average_waiting_time - 7.75).abs() < 1e-10);
        assert_eq!(r.rounded_average_waiting_time(), 7.8);
    }

    #[test]
    fn test_sjf_single_late_process_idles() {
        let r = schedule(&[Process::new("P1", 5, 3)], Algorithm::Sjf).unwrap();
        let p = &r.processes[0];
        assert_eq!(p.completion_time, 8);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(r.total_idle_time(), 5);
    }

    #[test]
    fn test_sjf_equal_jobs_input_order() {
        let procs = vec![Process::new("P1", 0, 4), Process::new("P2", 0, 4)];
        let r = schedule(&procs, Algorithm::Sjf).unwrap();
        assert_eq!(r.execution_order(), vec!["P1", "P2"]);
        assert_eq!(completions(&r), vec![4, 8]);
    }

    #[test]
    fn test_empty_batch_rejected() {
        for algorithm in Algorithm::ALL {
            let err = schedule(&[], algorithm).unwrap_err();
            assert!(err.is_empty_batch());
        }
    }

    #[test]
    fn test_invalid_process_rejected() {
        let cases = [
            Process::new("", 0, 1),
            Process::new("P1", -1, 1),
            Process::new("P1", 0, 0),
            Process::new("P1", 0, -3),
        ];
        for bad in cases {
            let procs = vec![Process::new("ok", 0, 1), bad];
            let err = schedule(&procs, Algorithm::Sjf).unwrap_err();
            assert!(err.is_invalid_process(), "{err}");
        }
    }

    #[test]
    fn test_completion_overflow_rejected() {
        let procs = [Process::new("P1", i64::MAX, 1)];
        for algorithm in Algorithm::ALL {
            let err = schedule(&procs, algorithm).unwrap_err();
            assert!(err.is_invalid_process(), "{err}");
        }
    }

    #[test]
    fn test_huge_bursts_average_without_overflow() {
        let procs = vec![
            Process::new("P1", 0, 500_000_000_000_000_000),
            Process::new("P2", 0, 1),
            Process::new("P3", 0, 1),
        ];
        let r = schedule(&procs, Algorithm::Fcfs).unwrap();
        // TAT: 5e17, 5e17 + 1, 5e17 + 2
        let tat = r.rounded_average_turnaround_time();
        assert!((tat / 5.0e17 - 1.0).abs() < 1e-12);
        let wt = r.rounded_average_waiting_time();
        assert!((wt / 3.333_333_333_333_333_5e17 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_request_roundtrip() {
        let json = r#"{
            "algorithm": "SJF",
            "processes": [
                {"id": "P1", "arrival_time": 0, "burst_time": 4},
                {"id": "P2", "arrival_time": 0, "burst_time": 4}
            ]
        }"#;
        let request: ScheduleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm, Algorithm::Sjf);
        let r = request.schedule().unwrap();
        assert_eq!(r.makespan(), 8);
    }

    #[test]
    fn test_request_defaults_to_fcfs() {
        let request: ScheduleRequest =
            serde_json::from_str(r#"{"processes":[{"id":"A","arrival_time":2,"burst_time":1}]}"#)
                .unwrap();
        assert_eq!(request.algorithm, Algorithm::Fcfs);
        let r = ScheduleRequest::new(Algorithm::Sjf, Vec::new())
            .with_process(Process::new("A", 0, 2))
            .schedule()
            .unwrap();
        assert_eq!(r.algorithm, Algorithm::Sjf);
    }

    // Randomized checks of the invariants every schedule must satisfy.

    fn random_batches() -> Vec<Vec<Process>> {
        let mut rng = SmallRng::seed_from_u64(42);
        let spec = WorkloadSpec::new(6).with_max_arrival(20).with_max_burst(9);
        (0..200)
            .map(|i| {
                let spec = spec.clone().with_count(1 + i % 10);
                random_batch(&mut rng, &spec)
            })
            .collect()
    }

    #[test]
    fn test_metric_identities_hold() {
        for procs in random_batches() {
            for algorithm in Algorithm::ALL {
                let r = schedule(&procs, algorithm).unwrap();
                assert_eq!(r.len(), procs.len());
                for p in &r.processes {
                    assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
                    assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
                    assert!(p.waiting_time >= 0);
                    assert!(p.turnaround_time >= p.burst_time);
                }
            }
        }
    }

    #[test]
    fn test_no_overlapping_execution() {
        for procs in random_batches() {
            for algorithm in Algorithm::ALL {
                let r = schedule(&procs, algorithm).unwrap();
                for pair in r.processes.windows(2) {
                    assert!(pair[0].completion_time <= pair[1].start_time());
                }
            }
        }
    }

    #[test]
    fn test_never_starts_before_arrival() {
        for procs in random_batches() {
            let r = schedule(&procs, Algorithm::Sjf).unwrap();
            for p in &r.processes {
                assert!(p.start_time() >= p.arrival_time);
            }
        }
    }

    #[test]
    fn test_rescheduling_is_deterministic() {
        for procs in random_batches() {
            for algorithm in Algorithm::ALL {
                let first = schedule(&procs, algorithm).unwrap();
                let second = schedule(&procs, algorithm).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_sjf_never_worse_on_average_when_all_arrive_together() {
        let mut rng = SmallRng::seed_from_u64(7);
        let spec = WorkloadSpec::new(8).with_max_arrival(0).with_max_burst(20);
        for _ in 0..50 {
            let procs = random_batch(&mut rng, &spec);
            let fcfs = schedule(&procs, Algorithm::Fcfs).unwrap();
            let sjf = schedule(&procs, Algorithm::Sjf).unwrap();
            assert!(sjf.average_waiting_time <= fcfs.average_waiting_time + 1e-10);
        }
    }
}
