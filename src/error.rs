//! Error types for scheduling and PCB file loading.

/// Why a scheduler refused to compute a result.
///
/// Every variant is reported before any statistic is produced, so a
/// caller holding a previous [`ScheduleResult`](crate::models::ScheduleResult)
/// keeps it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("ready queue is empty")]
    EmptyQueue,

    #[error("no ready queue supplied")]
    MissingQueue,

    #[error("no result buffer supplied")]
    MissingResult,

    #[error("round robin quantum must be at least one tick")]
    ZeroQuantum,

    #[error("round robin requires a quantum")]
    MissingQuantum,

    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Why a PCB file could not be turned into a ready queue.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pcb file contains no records")]
    Empty,

    #[error("pcb file is {len} bytes, not a multiple of the {record_size}-byte record")]
    Truncated { len: usize, record_size: usize },
}
