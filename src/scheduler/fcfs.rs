//! First-Come-First-Served.
//!
//! Non-preemptive; the ready queue is ordered by the [`Fifo`] rule, which
//! keeps its given order, and that order is taken to be arrival order.

use log::debug;

use super::{ensure_non_empty, CpuScheduler};
use crate::cpu::VirtualCpu;
use crate::dispatching::{order_by, rules::Fifo};
use crate::error::ScheduleError;
use crate::models::{ProcessControlBlock, ScheduleResult};
use crate::stats::StatsAccumulator;

/// First-Come-First-Served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(
        &self,
        queue: &mut [ProcessControlBlock],
    ) -> Result<ScheduleResult, ScheduleError> {
        ensure_non_empty(queue)?;
        order_by(queue, &Fifo);
        Ok(service_in_order(queue))
    }
}

/// Runs every process to completion in queue order.
///
/// `waiting = clock - arrival` (clamped at zero when the process arrives
/// after the CPU frees up) and `turnaround = waiting + burst`.
pub(crate) fn service_in_order(queue: &mut [ProcessControlBlock]) -> ScheduleResult {
    let mut cpu = VirtualCpu::new();
    let mut stats = StatsAccumulator::new();

    for (slot, pcb) in queue.iter_mut().enumerate() {
        if pcb.is_finished() {
            stats.record_degenerate();
            continue;
        }

        let waiting = cpu.clock().saturating_sub(u64::from(pcb.arrival));
        let burst = u64::from(cpu.run_to_completion(pcb));
        let turnaround = waiting + burst;

        debug!(
            "slot {} done at {}: waiting {}, turnaround {}",
            slot,
            cpu.clock(),
            waiting,
            turnaround
        );
        stats.record(waiting, turnaround);
    }

    stats.finish(cpu.clock())
}
