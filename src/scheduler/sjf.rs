//! Shortest-Job-First (non-preemptive).

use super::fcfs::service_in_order;
use super::{ensure_non_empty, CpuScheduler};
use crate::dispatching::{order_by, rules::ShortestBurst};
use crate::error::ScheduleError;
use crate::models::{ProcessControlBlock, ScheduleResult};

/// Shortest-Job-First scheduler.
///
/// Stably sorts the ready queue by remaining burst, then services it like
/// FCFS. A started process is never preempted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(
        &self,
        queue: &mut [ProcessControlBlock],
    ) -> Result<ScheduleResult, ScheduleError> {
        ensure_non_empty(queue)?;
        order_by(queue, &ShortestBurst);
        Ok(service_in_order(queue))
    }
}
