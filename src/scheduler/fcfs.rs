//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (input order breaks ties).
//! 2. Walk the sorted list with a clock starting at 0, idling forward to
//!    each arrival if the CPU would otherwise start early.
//!
//! # Complexity
//! O(n log n)

use tracing::{debug, trace};

use super::completion_time;
use crate::error::ScheduleError;
use crate::models::{Process, ScheduledProcess};

/// Runs FCFS over `processes`, returning them in completion order.
pub(crate) fn run(processes: &[Process]) -> Result<Vec<ScheduledProcess>, ScheduleError> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);

    let mut clock = 0;
    let mut scheduled = Vec::with_capacity(processes.len());

    for &idx in &order {
        let process = &processes[idx];
        if clock < process.arrival_time {
            trace!(from = clock, to = process.arrival_time, "cpu idle");
            clock = process.arrival_time;
        }

        let completion = completion_time(process, clock)?;
        debug!(id = %process.id, start = clock, completion, "dispatch");
        scheduled.push(ScheduledProcess::complete(process, completion));
        clock = completion;
    }

    Ok(scheduled)
}
