//! Shortest-Remaining-Time-First, as a static ranking.
//!
//! The ready queue is ranked once by remaining burst and each process then
//! runs to completion. Remaining times are not re-evaluated per tick, so
//! the schedule is deterministic in queue contents alone.
//!
//! Statistics ignore arrival: a process waits for the clock value at which
//! it is dispatched, and its turnaround is its own burst.

use log::debug;

use super::{ensure_non_empty, CpuScheduler};
use crate::cpu::VirtualCpu;
use crate::dispatching::{order_by, rules::ShortestBurst};
use crate::error::ScheduleError;
use crate::models::{ProcessControlBlock, ScheduleResult};
use crate::stats::StatsAccumulator;

/// Shortest-Remaining-Time-First scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl CpuScheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(
        &self,
        queue: &mut [ProcessControlBlock],
    ) -> Result<ScheduleResult, ScheduleError> {
        ensure_non_empty(queue)?;
        order_by(queue, &ShortestBurst);

        let mut cpu = VirtualCpu::new();
        let mut stats = StatsAccumulator::new();

        for pcb in queue.iter_mut() {
            if pcb.is_finished() {
                stats.record_degenerate();
                continue;
            }

            let waiting = cpu.clock();
            let run = u64::from(cpu.run_to_completion(pcb));
            debug!("dispatched at {}, ran {} ticks", waiting, run);
            stats.record(waiting, run);
        }

        Ok(stats.finish(cpu.clock()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srtf_with_arrivals() {
        let mut queue = vec![
            ProcessControlBlock::new(5).with_arrival(0).with_priority(0),
            ProcessControlBlock::new(3).with_arrival(1).with_priority(1),
            ProcessControlBlock::new(7).with_arrival(2).with_priority(2),
        ];
        let result = Srtf.schedule(&mut queue).unwrap();

        // Order 3, 5, 7 → waiting (0 + 3 + 8) / 3, turnaround (3 + 5 + 7) / 3
        assert!((result.average_waiting_time - 11.0 / 3.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 5.0).abs() < 1e-6);
        assert_eq!(result.total_run_time, 15);
    }

    #[test]
    fn test_srtf_varying_bursts() {
        let mut queue = vec![
            ProcessControlBlock::new(8),
            ProcessControlBlock::new(2),
            ProcessControlBlock::new(5),
        ];
        let result = Srtf.schedule(&mut queue).unwrap();

        // Order 2, 5, 8 → waiting (0 + 2 + 7) / 3
        assert!((result.average_waiting_time - 3.0).abs() < 1e-6);
        assert!((result.average_turnaround_time - 5.0).abs() < 1e-6);
        assert_eq!(result.total_run_time, 15);
    }

    #[test]
    fn test_srtf_single_process() {
        let mut queue = vec![ProcessControlBlock::new(5)];
        let result = Srtf.schedule(&mut queue).unwrap();

        assert!((result.average_waiting_time - 0.0).abs() < 1e-6);
        assert!((result.average_turnaround_time - 5.0).abs() < 1e-6);
        assert_eq!(result.total_run_time, 5);
    }

    #[test]
    fn test_srtf_empty_queue() {
        assert_eq!(Srtf.schedule(&mut []), Err(ScheduleError::EmptyQueue));
    }
}
