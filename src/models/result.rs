//! Schedule statistics model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate statistics for one scheduling run.
///
/// Produced by every [`CpuScheduler`](crate::scheduler::CpuScheduler).
/// A failed run never yields a partially filled result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Mean time processes spent ready but not running (ticks).
    pub average_waiting_time: f32,
    /// Mean time from arrival to completion (ticks).
    pub average_turnaround_time: f32,
    /// Clock value when the last process finished.
    pub total_run_time: u64,
}

impl fmt::Display for ScheduleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Waiting Time: {:.2}", self.average_waiting_time)?;
        writeln!(
            f,
            "Average Turnaround Time: {:.2}",
            self.average_turnaround_time
        )?;
        write!(f, "Total Clock Time: {}", self.total_run_time)
    }
}
