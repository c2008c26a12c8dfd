//! Non-preemptive CPU scheduling metrics.
//!
//! Computes completion, turnaround, and waiting times for a small batch of
//! processes under First-Come-First-Served or non-preemptive
//! Shortest-Job-First, along with the batch averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ScheduledProcess`, `ScheduleResult`, `Algorithm`
//! - **`scheduler`**: The `schedule` entry point, FCFS/SJF strategies, and metrics
//! - **`validation`**: Batch checks for front ends (size bounds, duplicate IDs, time ranges)
//! - **`report`**: Plain-text tables, derivations, and timelines
//! - **`workload`**: Seeded random batches
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::{Algorithm, Process};
//! use cpu_schedule::scheduler::schedule;
//!
//! let procs = vec![
//!     Process::new("P1", 0, 8),
//!     Process::new("P2", 1, 4),
//!     Process::new("P3", 2, 9),
//!     Process::new("P4", 3, 5),
//! ];
//! let result = schedule(&procs, Algorithm::Sjf).unwrap();
//! assert_eq!(result.execution_order(), vec!["P1", "P2", "P4", "P3"]);
//! // WT: 0, 7, 9, 15 → 31 / 4 = 7.75
//! assert_eq!(result.rounded_average_waiting_time(), 7.8);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ScheduleError, ScheduleErrorKind};
