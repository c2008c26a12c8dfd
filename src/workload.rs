//! Synthetic process batches.
//!
//! Generates reproducible random workloads for demos and tests. Pass a
//! seeded RNG (e.g., `SmallRng::seed_from_u64`) for repeatable batches.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Burst times are drawn from `1..=max_burst`.
    pub max_burst: i64,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with arrivals in 0..=10 and bursts in 1..=10.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 10,
        }
    }

    /// Sets the process count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }
}

/// Generates a batch with ids `P1..Pn`.
///
/// Out-of-range bounds are clamped so every generated process is well formed.
pub fn random_batch<R: Rng + ?Sized>(rng: &mut R, spec: &WorkloadSpec) -> Vec<Process> {
    let max_arrival = spec.max_arrival.max(0);
    let max_burst = spec.max_burst.max(1);

    (1..=spec.count)
        .map(|i| {
            Process::new(
                format!("P{i}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(1..=max_burst),
            )
        })
        .collect()
}

/// A fixed five-process demo batch for quick experiments.
///
/// Ids follow the `P1..Pn` convention; the arrival and burst values are
/// illustrative, picked so FCFS and SJF produce different orders.
pub fn sample_batch() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 6),
        Process::new("P2", 1, 8),
        Process::new("P3", 2, 7),
        Process::new("P4", 3, 3),
        Process::new("P5", 4, 4),
    ]
}
