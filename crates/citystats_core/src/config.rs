//! Run configuration for the report pipeline.
//!
//! # Invariants
//! - `ReportConfig::default()` is the configuration the CLI runs with.

use std::path::PathBuf;

/// Input file read by the CLI, relative to the working directory.
pub const DEFAULT_SOURCE_PATH: &str = "cities.txt";
/// State code the single-state reports focus on.
pub const DEFAULT_TARGET_STATE: &str = "AR";
/// Number of cities listed per state in the top-cities report.
pub const DEFAULT_TOP_N: usize = 3;

/// Settings shared by the load step and the report step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub source_path: PathBuf,
    /// Compared exactly (case-sensitive) against each city's state.
    pub target_state: String,
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            target_state: DEFAULT_TARGET_STATE.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}
