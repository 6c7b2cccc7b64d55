use crate::{ScheduleOutcome, Workload};

/// A disk-head scheduling policy simulated over a complete workload.
pub trait Scheduler {
    /// Policy name used in reports.
    fn name(&self) -> &'static str;

    /// Simulates the policy against its own working copy of `workload`,
    /// returning every completion in service order. The workload itself is
    /// never mutated.
    fn run(&self, workload: &Workload) -> ScheduleOutcome;
}
