//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::ProcessControlBlock;

/// First In First Out.
///
/// Scores every process equally, so a stable sort leaves the queue in
/// arrival (input) order.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, _pcb: &ProcessControlBlock) -> RuleScore {
        0
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest remaining burst first.
///
/// Minimizes mean waiting time when all processes are ready at once.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, pcb: &ProcessControlBlock) -> RuleScore {
        pcb.remaining_burst_time as RuleScore
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Burst"
    }
}

/// Lowest priority number first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "P"
    }

    fn evaluate(&self, pcb: &ProcessControlBlock) -> RuleScore {
        pcb.priority as RuleScore
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst() {
        let short = ProcessControlBlock::new(2);
        let long = ProcessControlBlock::new(9);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_highest_priority() {
        let urgent = ProcessControlBlock::new(5).with_priority(0);
        let relaxed = ProcessControlBlock::new(5).with_priority(10);
        assert!(HighestPriority.evaluate(&urgent) < HighestPriority.evaluate(&relaxed));
    }

    #[test]
    fn test_fifo_ties_everything() {
        let a = ProcessControlBlock::new(1).with_priority(3);
        let b = ProcessControlBlock::new(8).with_arrival(4);
        assert_eq!(Fifo.evaluate(&a), Fifo.evaluate(&b));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fifo.name(), "FCFS");
        assert_eq!(ShortestBurst.description(), "Shortest Remaining Burst");
        assert_eq!(HighestPriority.name(), "P");
    }
}
