//! Non-preemptive priority scheduling.

use super::fcfs::service_in_order;
use super::{ensure_non_empty, CpuScheduler};
use crate::dispatching::{order_by, rules::HighestPriority};
use crate::error::ScheduleError;
use crate::models::{ProcessControlBlock, ScheduleResult};

/// Priority scheduler.
///
/// Lower `priority` values are serviced first; equal priorities keep their
/// queue order. Statistics follow the FCFS contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl CpuScheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "P"
    }

    fn schedule(
        &self,
        queue: &mut [ProcessControlBlock],
    ) -> Result<ScheduleResult, ScheduleError> {
        ensure_non_empty(queue)?;
        order_by(queue, &HighestPriority);
        Ok(service_in_order(queue))
    }
}
