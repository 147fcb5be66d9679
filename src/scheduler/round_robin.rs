//! Round Robin (preemptive, time-sliced).
//!
//! # Algorithm
//!
//! 1. Enqueue every process with work left, in queue order.
//! 2. Pop the front process and run it for at most `quantum` ticks.
//! 3. If it still has work, push it to the back; otherwise record its
//!    completion tick.
//! 4. Repeat until the ready queue drains.
//!
//! `waiting = completion - arrival - burst` (clamped at zero) and
//! `turnaround = waiting + burst`. With a quantum at least as long as the
//! longest burst this reduces exactly to FCFS.

use std::collections::VecDeque;

use log::debug;

use super::{ensure_non_empty, CpuScheduler};
use crate::cpu::VirtualCpu;
use crate::error::ScheduleError;
use crate::models::{ProcessControlBlock, ScheduleResult};
use crate::stats::StatsAccumulator;

/// Round Robin scheduler with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: u32,
}

impl RoundRobin {
    /// Creates a scheduler granting `quantum` ticks per visit.
    pub fn new(quantum: u32) -> Self {
        Self { quantum }
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(
        &self,
        queue: &mut [ProcessControlBlock],
    ) -> Result<ScheduleResult, ScheduleError> {
        if self.quantum == 0 {
            return Err(ScheduleError::ZeroQuantum);
        }
        ensure_non_empty(queue)?;

        let bursts: Vec<u64> = queue
            .iter()
            .map(|p| u64::from(p.remaining_burst_time))
            .collect();
        let mut stats = StatsAccumulator::new();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(queue.len());

        for (slot, pcb) in queue.iter().enumerate() {
            if pcb.is_finished() {
                stats.record_degenerate();
            } else {
                ready.push_back(slot);
            }
        }

        let mut cpu = VirtualCpu::new();
        while let Some(slot) = ready.pop_front() {
            let pcb = &mut queue[slot];
            let ran = cpu.run_for(pcb, self.quantum);

            if !pcb.is_finished() {
                ready.push_back(slot);
                continue;
            }

            let completion = cpu.clock();
            let waiting = completion
                .saturating_sub(u64::from(pcb.arrival))
                .saturating_sub(bursts[slot]);
            let turnaround = waiting + bursts[slot];
            debug!(
                "slot {} done at {} after final slice of {}: waiting {}, turnaround {}",
                slot, completion, ran, waiting, turnaround
            );
            stats.record(waiting, turnaround);
        }

        Ok(stats.finish(cpu.clock()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::fcfs::Fcfs;

    fn queue_of(bursts: &[u32]) -> Vec<ProcessControlBlock> {
        bursts.iter().map(|&b| ProcessControlBlock::new(b)).collect()
    }

    #[test]
    fn test_rr_quantum_five() {
        let mut queue = queue_of(&[5, 3, 7]);
        let result = RoundRobin::new(5).schedule(&mut queue).unwrap();

        // Completions at 5, 8, 15 (third process needs two visits)
        assert!((result.average_waiting_time - 13.0 / 3.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 28.0 / 3.0).abs() < 1e-5);
        assert_eq!(result.total_run_time, 15);
        assert!(queue.iter().all(|p| p.is_finished()));
    }

    #[test]
    fn test_rr_quantum_two() {
        let mut queue = queue_of(&[5, 3, 7]);
        let result = RoundRobin::new(2).schedule(&mut queue).unwrap();

        // Completions: P2 at 9, P1 at 12, P3 at 15
        // waiting 7, 6, 8; turnaround 12, 9, 15
        assert!((result.average_waiting_time - 7.0).abs() < 1e-6);
        assert!((result.average_turnaround_time - 12.0).abs() < 1e-6);
        assert_eq!(result.total_run_time, 15);
    }

    #[test]
    fn test_rr_quantum_two_with_arrivals() {
        let mut queue = vec![
            ProcessControlBlock::new(5).with_arrival(0),
            ProcessControlBlock::new(3).with_arrival(1),
            ProcessControlBlock::new(7).with_arrival(2),
        ];
        let result = RoundRobin::new(2).schedule(&mut queue).unwrap();

        // Completions: P2 at 9, P1 at 12, P3 at 15
        // turnaround 12 - 0, 9 - 1, 15 - 2 = 12, 8, 13
        // waiting 12 - 5, 8 - 3, 13 - 7 = 7, 5, 6
        assert!((result.average_turnaround_time - 11.0).abs() < 1e-6);
        assert!((result.average_waiting_time - 6.0).abs() < 1e-6);
        assert_eq!(result.total_run_time, 15);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let mut rr_queue = vec![
            ProcessControlBlock::new(4).with_arrival(0),
            ProcessControlBlock::new(6).with_arrival(2),
            ProcessControlBlock::new(2).with_arrival(20),
        ];
        let mut fcfs_queue = rr_queue.clone();

        let rr = RoundRobin::new(6).schedule(&mut rr_queue).unwrap();
        let fcfs = Fcfs.schedule(&mut fcfs_queue).unwrap();
        assert_eq!(rr, fcfs);
    }

    #[test]
    fn test_rr_zero_burst() {
        let mut queue = queue_of(&[0, 4]);
        let result = RoundRobin::new(3).schedule(&mut queue).unwrap();

        assert!((result.average_waiting_time - 0.0).abs() < 1e-6);
        assert!((result.average_turnaround_time - 2.0).abs() < 1e-6);
        assert_eq!(result.total_run_time, 4);
    }

    #[test]
    fn test_rr_zero_quantum() {
        let mut queue = queue_of(&[5]);
        assert_eq!(
            RoundRobin::new(0).schedule(&mut queue),
            Err(ScheduleError::ZeroQuantum)
        );
        assert_eq!(queue[0].remaining_burst_time, 5);
    }

    #[test]
    fn test_rr_empty_queue() {
        assert_eq!(
            RoundRobin::new(4).schedule(&mut []),
            Err(ScheduleError::EmptyQueue)
        );
    }
}
