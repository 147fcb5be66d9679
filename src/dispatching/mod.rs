//! Dispatching rules for ordering the ready queue.
//!
//! Non-preemptive schedulers differ only in the order they service the
//! ready queue. Each order is a [`DispatchingRule`]; [`order_by`] applies
//! it with a stable sort so equal scores keep their queue order.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{order_by, rules};
//! use cpu_sched::models::ProcessControlBlock;
//!
//! let mut queue = vec![ProcessControlBlock::new(5), ProcessControlBlock::new(3)];
//! order_by(&mut queue, &rules::ShortestBurst);
//! assert_eq!(queue[0].remaining_burst_time, 3);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod rules;

use log::debug;
use std::fmt::Debug;

use crate::models::ProcessControlBlock;

/// Score returned by a dispatching rule.
///
/// Lower scores = serviced first.
pub type RuleScore = u64;

/// A rule that ranks processes in the ready queue.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process. Lower = serviced first.
    fn evaluate(&self, pcb: &ProcessControlBlock) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Stably sorts `queue` in place by `rule`.
pub fn order_by<R: DispatchingRule + ?Sized>(queue: &mut [ProcessControlBlock], rule: &R) {
    queue.sort_by_key(|pcb| rule.evaluate(pcb));
    debug!(
        "ordered {} processes by {} ({})",
        queue.len(),
        rule.name(),
        rule.description()
    );
}
