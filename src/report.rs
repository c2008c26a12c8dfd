//! Plain-text rendering of schedule results.
//!
//! - [`render_table`]: tab-separated per-process table with averages.
//! - [`explain`]: the turnaround/waiting arithmetic for each process.
//! - [`render_timeline`]: one-line Gantt chart.

use std::fmt::Write;

use crate::models::{ScheduleResult, TimelineSlot};

/// Renders the per-process table followed by the rounded averages.
///
/// ```text
/// PID	AT	BT	CT	WT	TAT
/// P1	0	5	5	0	5
///
/// Average Waiting Time = 0.0
/// Average Turnaround Time = 5.0
/// ```
pub fn render_table(result: &ScheduleResult) -> String {
    let mut out = String::from("PID\tAT\tBT\tCT\tWT\tTAT\n");
    for p in &result.processes {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            p.id,
            p.arrival_time,
            p.burst_time,
            p.completion_time,
            p.waiting_time,
            p.turnaround_time
        );
    }
    let _ = writeln!(
        out,
        "\nAverage Waiting Time = {:.1}",
        result.rounded_average_waiting_time()
    );
    let _ = writeln!(
        out,
        "Average Turnaround Time = {:.1}",
        result.rounded_average_turnaround_time()
    );
    out
}

/// Shows how each process's turnaround and waiting times were derived.
pub fn explain(result: &ScheduleResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})",
        result.algorithm.name(),
        result.algorithm.description()
    );

    for p in &result.processes {
        let _ = writeln!(
            out,
            "\n{}: runs {}..{}",
            p.id,
            p.start_time(),
            p.completion_time
        );
        let _ = writeln!(
            out,
            "  TAT = CT - AT = {} - {} = {}",
            p.completion_time, p.arrival_time, p.turnaround_time
        );
        let _ = writeln!(
            out,
            "  WT = TAT - BT = {} - {} = {}",
            p.turnaround_time, p.burst_time, p.waiting_time
        );
    }

    let n = result.len();
    let total_wt: i128 = result
        .processes
        .iter()
        .map(|p| i128::from(p.waiting_time))
        .sum();
    let total_tat: i128 = result
        .processes
        .iter()
        .map(|p| i128::from(p.turnaround_time))
        .sum();
    let _ = writeln!(
        out,
        "\nAverage WT = {total_wt} / {n} = {:.1}",
        result.rounded_average_waiting_time()
    );
    let _ = writeln!(
        out,
        "Average TAT = {total_tat} / {n} = {:.1}",
        result.rounded_average_turnaround_time()
    );
    out
}

/// Renders the CPU timeline, e.g. `| idle 0-5 | P1 5-8 |`.
pub fn render_timeline(result: &ScheduleResult) -> String {
    let mut out = String::from("|");
    for slot in result.timeline() {
        let _ = match &slot {
            TimelineSlot::Idle { start, end } => write!(out, " idle {start}-{end} |"),
            TimelineSlot::Run { id, start, end } => write!(out, " {id} {start}-{end} |"),
        };
    }
    out
}
