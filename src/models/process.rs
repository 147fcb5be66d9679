//! Process control block model.
//!
//! A process control block (PCB) is the unit of work handed to the CPU
//! schedulers. It carries only scheduling state: how much CPU time is
//! still needed, when the process became eligible, and its priority.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1.3

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the virtual CPU.
///
/// # Time Representation
/// All times are in virtual CPU ticks relative to the start of the
/// simulation (t=0). One tick is one call to
/// [`VirtualCpu::tick`](crate::cpu::VirtualCpu::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessControlBlock {
    /// CPU ticks still required. Only the virtual CPU decrements this.
    pub remaining_burst_time: u32,
    /// Scheduling priority (lower = serviced first).
    pub priority: u32,
    /// Tick at which the process becomes eligible.
    pub arrival: u32,
    /// Set once the process has received its first tick of service.
    pub started: bool,
}

impl ProcessControlBlock {
    /// Creates a process needing `burst` ticks, arriving at t=0 with priority 0.
    pub fn new(burst: u32) -> Self {
        Self {
            remaining_burst_time: burst,
            ..Default::default()
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival: u32) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process needs no more CPU time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_burst_time == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcb_builder() {
        let pcb = ProcessControlBlock::new(7).with_arrival(3).with_priority(2);

        assert_eq!(pcb.remaining_burst_time, 7);
        assert_eq!(pcb.arrival, 3);
        assert_eq!(pcb.priority, 2);
        assert!(!pcb.started);
        assert!(!pcb.is_finished());
    }

    #[test]
    fn test_pcb_zero_burst_is_finished() {
        assert!(ProcessControlBlock::new(0).is_finished());
    }
}
