//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//!
//! Greedy simulation with a clock starting at 0:
//! 1. Scan unfinished processes that have arrived by the clock, in input
//!    order, keeping a running best: a candidate replaces the best only if
//!    its burst is strictly shorter, or equal with a strictly earlier arrival.
//! 2. If nothing has arrived, jump the clock to the earliest pending arrival.
//! 3. Otherwise run the best to completion and mark it finished.
//!
//! A job arriving mid-burst never interrupts the running one.
//!
//! # Complexity
//! O(n²)
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::{debug, trace};

use super::completion_time;
use crate::error::ScheduleError;
use crate::models::{Process, ScheduledProcess};

/// Runs non-preemptive SJF over `processes`, returning them in completion order.
pub(crate) fn run(processes: &[Process]) -> Result<Vec<ScheduledProcess>, ScheduleError> {
    let mut finished = vec![false; processes.len()];
    let mut clock = 0;
    let mut scheduled = Vec::with_capacity(processes.len());

    while scheduled.len() < processes.len() {
        let Some(idx) = select_shortest(processes, &finished, clock) else {
            // Nothing eligible: idle until the next arrival.
            let next = processes
                .iter()
                .zip(&finished)
                .filter(|(_, done)| !**done)
                .map(|(p, _)| p.arrival_time)
                .min()
                .unwrap_or(clock);
            trace!(from = clock, to = next, "cpu idle");
            clock = next;
            continue;
        };

        let process = &processes[idx];
        let completion = completion_time(process, clock)?;
        debug!(id = %process.id, start = clock, completion, "dispatch");
        scheduled.push(ScheduledProcess::complete(process, completion));
        finished[idx] = true;
        clock = completion;
    }

    Ok(scheduled)
}

/// Index of the process to dispatch at `clock`, if any has arrived.
///
/// The first eligible process seeds the running best; later candidates only
/// displace it on a strictly shorter burst, or an equal burst with a strictly
/// earlier arrival. Full ties keep the earlier-scanned process.
fn select_shortest(processes: &[Process], finished: &[bool], clock: i64) -> Option<usize> {
    let mut best: Option<usize> = None;

    for (i, candidate) in processes.iter().enumerate() {
        if finished[i] || !candidate.is_arrived(clock) {
            continue;
        }
        best = match best {
            None => Some(i),
            Some(b) => {
                let current = &processes[b];
                let shorter = candidate.burst_time < current.burst_time;
                let earlier_tie = candidate.burst_time == current.burst_time
                    && candidate.arrival_time < current.arrival_time;
                if shorter || earlier_tie {
                    Some(i)
                } else {
                    Some(b)
                }
            }
        };
    }

    best
}
