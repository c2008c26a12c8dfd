//! CPU scheduling domain models.
//!
//! Provides the data types passed into and out of the scheduler.
//! Inputs are plain [`Process`] records; outputs are [`ScheduledProcess`]
//! records collected in a [`ScheduleResult`].
//!
//! # Terminology
//!
//! | Field | Meaning |
//! |-------|---------|
//! | Arrival (AT) | Instant the process becomes eligible |
//! | Burst (BT) | Uninterrupted execution time required |
//! | Completion (CT) | Instant the process finishes |
//! | Turnaround (TAT) | CT - AT |
//! | Waiting (WT) | TAT - BT |

mod algorithm;
mod process;
mod schedule;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use process::Process;
pub use schedule::{ScheduleResult, ScheduledProcess, TimelineSlot};
