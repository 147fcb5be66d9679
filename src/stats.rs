//! Per-run statistics aggregation.
//!
//! Every scheduler feeds one waiting/turnaround contribution per process
//! into a [`StatsAccumulator`] and finishes it with the final clock.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting time | Mean ticks spent ready but not running |
//! | Average turnaround time | Mean ticks from arrival to completion |
//! | Total run time | Clock value when the last process finished |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::ScheduleResult;

/// Running totals for one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct StatsAccumulator {
    total_waiting: u64,
    total_turnaround: u64,
    count: usize,
}

impl StatsAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one serviced process.
    pub fn record(&mut self, waiting: u64, turnaround: u64) {
        self.total_waiting += waiting;
        self.total_turnaround += turnaround;
        self.count += 1;
    }

    /// Counts a process that arrived with no work; it contributes zero to both totals.
    pub fn record_degenerate(&mut self) {
        self.count += 1;
    }

    /// Computes the averages.
    pub fn finish(&self, total_run_time: u64) -> ScheduleResult {
        if self.count == 0 {
            return ScheduleResult {
                total_run_time,
                ..Default::default()
            };
        }
        let n = self.count as f64;
        ScheduleResult {
            average_waiting_time: (self.total_waiting as f64 / n) as f32,
            average_turnaround_time: (self.total_turnaround as f64 / n) as f32,
            total_run_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_averages() {
        let mut stats = StatsAccumulator::new();
        stats.record(0, 5);
        stats.record(5, 8);
        stats.record(8, 15);

        let result = stats.finish(15);
        assert!((result.average_waiting_time - 13.0 / 3.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 28.0 / 3.0).abs() < 1e-5);
        assert_eq!(result.total_run_time, 15);
    }

    #[test]
    fn test_stats_degenerate_counts_in_mean() {
        let mut stats = StatsAccumulator::new();
        stats.record(2, 6);
        stats.record_degenerate();

        let result = stats.finish(4);
        assert!((result.average_waiting_time - 1.0).abs() < 1e-6);
        assert!((result.average_turnaround_time - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_stats_empty() {
        let result = StatsAccumulator::new().finish(0);
        assert_eq!(result, ScheduleResult::default());
    }
}
