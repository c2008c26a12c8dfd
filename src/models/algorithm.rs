//! Scheduling algorithm selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-preemptive scheduling algorithms supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served: run in arrival order.
    #[default]
    #[serde(rename = "FCFS", alias = "fcfs")]
    Fcfs,
    /// Shortest-Job-First: among arrived processes, run the shortest burst.
    #[serde(rename = "SJF", alias = "sjf")]
    Sjf,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Fcfs, Algorithm::Sjf];

    /// Short name (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
        }
    }

    /// Algorithm description.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served",
            Algorithm::Sjf => "Shortest-Job-First (non-preemptive)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scheduling algorithm '{}' (expected FCFS or SJF)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
