//! CPU scheduling algorithms.
//!
//! Every algorithm borrows the caller's ready queue mutably, drives the
//! shared [`VirtualCpu`](crate::cpu::VirtualCpu), and returns a
//! [`ScheduleResult`]. Processes are left in the order they were serviced
//! with their remaining burst time at zero.
//!
//! | Code | Scheduler | Preemptive | Order |
//! |------|-----------|------------|-------|
//! | FCFS | [`Fcfs`] | no | queue order |
//! | SJF | [`Sjf`] | no | remaining burst, stable |
//! | SRTF | [`Srtf`] | no (static ranking) | remaining burst, stable |
//! | P | [`PriorityScheduler`] | no | priority, stable |
//! | RR | [`RoundRobin`] | yes | queue order, time-sliced |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3: Scheduling Algorithms

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

use std::fmt;

pub use fcfs::Fcfs;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::error::ScheduleError;
use crate::models::{ProcessControlBlock, ScheduleResult};

/// A scheduling discipline over a single virtual CPU.
pub trait CpuScheduler {
    /// Algorithm code (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Services every process in `queue` and returns the run statistics.
    ///
    /// Fails without touching the queue if the input is invalid.
    fn schedule(&self, queue: &mut [ProcessControlBlock])
        -> Result<ScheduleResult, ScheduleError>;
}

pub(crate) fn ensure_non_empty(queue: &[ProcessControlBlock]) -> Result<(), ScheduleError> {
    if queue.is_empty() {
        return Err(ScheduleError::EmptyQueue);
    }
    Ok(())
}

/// Runs `scheduler` and writes the statistics into `result`.
///
/// A missing queue or result buffer is reported as an error before any
/// scheduling happens. On any error `result` is left as it was.
pub fn schedule_into<S: CpuScheduler + ?Sized>(
    scheduler: &S,
    queue: Option<&mut [ProcessControlBlock]>,
    result: Option<&mut ScheduleResult>,
) -> Result<(), ScheduleError> {
    let queue = queue.ok_or(ScheduleError::MissingQueue)?;
    let result = result.ok_or(ScheduleError::MissingResult)?;
    *result = scheduler.schedule(queue)?;
    Ok(())
}

/// Runs First-Come-First-Served over `queue`.
pub fn first_come_first_serve(
    queue: &mut [ProcessControlBlock],
) -> Result<ScheduleResult, ScheduleError> {
    Fcfs.schedule(queue)
}

/// Runs Shortest-Job-First over `queue`.
pub fn shortest_job_first(
    queue: &mut [ProcessControlBlock],
) -> Result<ScheduleResult, ScheduleError> {
    Sjf.schedule(queue)
}

/// Runs Shortest-Remaining-Time-First over `queue`.
pub fn shortest_remaining_time_first(
    queue: &mut [ProcessControlBlock],
) -> Result<ScheduleResult, ScheduleError> {
    Srtf.schedule(queue)
}

/// Runs priority scheduling over `queue`.
pub fn priority(queue: &mut [ProcessControlBlock]) -> Result<ScheduleResult, ScheduleError> {
    PriorityScheduler.schedule(queue)
}

/// Runs Round Robin over `queue` with the given quantum.
pub fn round_robin(
    queue: &mut [ProcessControlBlock],
    quantum: u32,
) -> Result<ScheduleResult, ScheduleError> {
    RoundRobin::new(quantum).schedule(queue)
}

/// Scheduling algorithm selected by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First-Come-First-Served ("FCFS").
    Fcfs,
    /// Shortest-Job-First ("SJF").
    Sjf,
    /// Shortest-Remaining-Time-First ("SRTF").
    Srtf,
    /// Priority ("P").
    Priority,
    /// Round Robin ("RR") with a quantum in ticks.
    RoundRobin { quantum: u32 },
}

impl Algorithm {
    /// Parses an algorithm code (FCFS, SJF, SRTF, P, RR), ignoring case.
    ///
    /// `quantum` is required for RR and ignored otherwise.
    pub fn from_code(code: &str, quantum: Option<u32>) -> Result<Self, ScheduleError> {
        match code.to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SJF" => Ok(Self::Sjf),
            "SRTF" => Ok(Self::Srtf),
            "P" => Ok(Self::Priority),
            "RR" => quantum
                .map(|quantum| Self::RoundRobin { quantum })
                .ok_or(ScheduleError::MissingQuantum),
            _ => Err(ScheduleError::UnknownAlgorithm(code.to_string())),
        }
    }

    /// The algorithm code, as reported by its scheduler.
    pub fn code(&self) -> &'static str {
        self.scheduler().name()
    }

    /// Boxes the matching scheduler.
    pub fn scheduler(&self) -> Box<dyn CpuScheduler> {
        match *self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::Srtf => Box::new(Srtf),
            Self::Priority => Box::new(PriorityScheduler),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }

    /// Runs the algorithm over `queue`.
    pub fn run(
        &self,
        queue: &mut [ProcessControlBlock],
    ) -> Result<ScheduleResult, ScheduleError> {
        self.scheduler().schedule(queue)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR (quantum {})", quantum),
            other => f.write_str(other.code()),
        }
    }
}
