//! Schedule metrics.
//!
//! Averages over a finished schedule plus a few CPU-level indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(TAT - BT) |
//! | Avg Turnaround Time | mean(CT - AT) |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use crate::models::ScheduleResult;

/// Arithmetic mean of integer values (0.0 when empty).
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = i64>,
{
    let (sum, n) = sum_count(values);
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}

/// Arithmetic mean rounded half-up to one decimal place (0.0 when empty).
///
/// Rounds on the exact rational `sum / n` in integer tenths, so midpoints
/// such as 8.65 are not lost to binary floating point.
pub fn mean_rounded<I>(values: I) -> f64
where
    I: IntoIterator<Item = i64>,
{
    let (sum, n) = sum_count(values);
    if n == 0 {
        return 0.0;
    }
    round_tenths(sum, n) as f64 / 10.0
}

/// `sum / n` in tenths, rounded half-up (toward +inf on exact midpoints).
///
/// Widened to i128 so sums of i64 metrics cannot overflow.
fn round_tenths(sum: i128, n: i128) -> i128 {
    (20 * sum + n).div_euclid(2 * n)
}

fn sum_count<I>(values: I) -> (i128, i128)
where
    I: IntoIterator<Item = i64>,
{
    values
        .into_iter()
        .fold((0, 0), |(sum, n), v| (sum + i128::from(v), n + 1))
}

/// CPU-level indicators for a finished schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleMetrics {
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU spent executing.
    pub busy_time: i64,
    /// Time the CPU sat idle before the last completion.
    pub idle_time: i64,
    /// busy_time / makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Longest single waiting time.
    pub max_waiting_time: i64,
    /// Longest single turnaround time.
    pub max_turnaround_time: i64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let busy_time: i64 = result.processes.iter().map(|p| p.burst_time).sum();

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                result.len() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            max_waiting_time: result
                .processes
                .iter()
                .map(|p| p.waiting_time)
                .max()
                .unwrap_or(0),
            max_turnaround_time: result
                .processes
                .iter()
                .map(|p| p.turnaround_time)
                .max()
                .unwrap_or(0),
        }
    }
}
