//! Single-CPU process scheduling simulator.
//!
//! Runs a ready queue of process control blocks through one of five
//! classic disciplines on a virtual tick clock and reports average waiting
//! time, average turnaround time and total run time.
//!
//! # Modules
//!
//! - **`models`**: `ProcessControlBlock`, `ScheduleResult`
//! - **`cpu`**: `VirtualCpu`, the tick executor every algorithm shares
//! - **`stats`**: `StatsAccumulator`, the per-run statistics contract
//! - **`dispatching`**: ready-queue ordering rules (FIFO, shortest burst, priority)
//! - **`scheduler`**: FCFS, SJF, SRTF, Priority, Round Robin
//! - **`pcb_file`**: binary PCB file loading and saving
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::ProcessControlBlock;
//! use cpu_sched::scheduler::{CpuScheduler, RoundRobin};
//!
//! let mut queue = vec![
//!     ProcessControlBlock::new(5),
//!     ProcessControlBlock::new(3),
//!     ProcessControlBlock::new(7),
//! ];
//! let result = RoundRobin::new(5).schedule(&mut queue).unwrap();
//! assert_eq!(result.total_run_time, 15);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod cpu;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod pcb_file;
pub mod scheduler;
pub mod stats;

pub use error::{LoadError, ScheduleError};
