//! Virtual CPU: the tick executor shared by every scheduler.
//!
//! Execution is modelled at one-tick granularity. Non-preemptive
//! disciplines run a process to completion as a loop of ticks; preemptive
//! ones stop after a quantum. Either way [`VirtualCpu::tick`] is the only
//! place a process's remaining burst time is reduced.

use log::trace;

use crate::models::ProcessControlBlock;

/// A single virtual CPU with a monotonic tick clock.
#[derive(Debug, Clone, Default)]
pub struct VirtualCpu {
    clock: u64,
}

impl VirtualCpu {
    /// Creates a CPU with the clock at t=0.
    pub fn new() -> Self {
        Self { clock: 0 }
    }

    /// Current clock value (ticks elapsed since t=0).
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Executes one tick of `pcb`.
    ///
    /// Returns `false` without touching the clock if the process has no
    /// remaining work.
    pub fn tick(&mut self, pcb: &mut ProcessControlBlock) -> bool {
        if pcb.is_finished() {
            return false;
        }
        pcb.remaining_burst_time -= 1;
        pcb.started = true;
        self.clock += 1;
        trace!(
            "tick {}: remaining burst {}",
            self.clock,
            pcb.remaining_burst_time
        );
        true
    }

    /// Runs `pcb` for at most `max_ticks` ticks. Returns ticks executed.
    pub fn run_for(&mut self, pcb: &mut ProcessControlBlock, max_ticks: u32) -> u32 {
        let mut executed = 0;
        while executed < max_ticks && self.tick(pcb) {
            executed += 1;
        }
        executed
    }

    /// Runs `pcb` until it finishes. Returns ticks executed.
    pub fn run_to_completion(&mut self, pcb: &mut ProcessControlBlock) -> u32 {
        self.run_for(pcb, u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_decrements_and_advances_clock() {
        let mut cpu = VirtualCpu::new();
        let mut pcb = ProcessControlBlock::new(2);

        assert!(cpu.tick(&mut pcb));
        assert_eq!(pcb.remaining_burst_time, 1);
        assert!(pcb.started);
        assert_eq!(cpu.clock(), 1);
    }

    #[test]
    fn test_tick_finished_process_is_noop() {
        let mut cpu = VirtualCpu::new();
        let mut pcb = ProcessControlBlock::new(0);

        assert!(!cpu.tick(&mut pcb));
        assert_eq!(pcb.remaining_burst_time, 0);
        assert!(!pcb.started);
        assert_eq!(cpu.clock(), 0);
    }

    #[test]
    fn test_run_for_stops_at_quantum() {
        let mut cpu = VirtualCpu::new();
        let mut pcb = ProcessControlBlock::new(7);

        assert_eq!(cpu.run_for(&mut pcb, 5), 5);
        assert_eq!(pcb.remaining_burst_time, 2);
        assert_eq!(cpu.run_for(&mut pcb, 5), 2);
        assert!(pcb.is_finished());
        assert_eq!(cpu.clock(), 7);
    }

    #[test]
    fn test_run_to_completion() {
        let mut cpu = VirtualCpu::new();
        let mut a = ProcessControlBlock::new(5);
        let mut b = ProcessControlBlock::new(3);

        assert_eq!(cpu.run_to_completion(&mut a), 5);
        assert_eq!(cpu.run_to_completion(&mut b), 3);
        assert_eq!(cpu.clock(), 8);
    }
}
