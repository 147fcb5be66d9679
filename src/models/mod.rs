//! CPU scheduling domain models.
//!
//! Provides the data types the schedulers consume and produce.
//!
//! # Domain Mappings
//!
//! | cpu-sched | OS kernel | Textbook |
//! |-----------|-----------|----------|
//! | ProcessControlBlock | task_struct (scheduling fields) | PCB |
//! | ready queue (`[ProcessControlBlock]`) | run queue | ready queue |
//! | ScheduleResult | scheduler statistics | Gantt chart summary |

mod process;
mod result;

pub use process::ProcessControlBlock;
pub use result::ScheduleResult;
