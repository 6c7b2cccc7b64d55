use crate::{ScheduleOutcome, Workload};

use super::{Elevator, FirstComeFirstServed, Scheduler};

/// The result of running both policies over one immutable workload. Each
/// scheduler builds its own working copy of the request set; neither run
/// sees the other's bookkeeping.
#[derive(Debug)]
pub struct Comparison {
    elevator: ScheduleOutcome,
    fcfs: ScheduleOutcome,
}

impl Comparison {
    pub fn run(workload: &Workload) -> Self {
        Self {
            elevator: Elevator.run(workload),
            fcfs: FirstComeFirstServed.run(workload),
        }
    }

    pub fn elevator(&self) -> &ScheduleOutcome {
        &self.elevator
    }

    pub fn fcfs(&self) -> &ScheduleOutcome {
        &self.fcfs
    }

    /// Both outcomes, labelled with their policy names, in report order.
    pub fn outcomes(&self) -> [(&'static str, &ScheduleOutcome); 2] {
        [
            (Elevator.name(), &self.elevator),
            (FirstComeFirstServed.name(), &self.fcfs),
        ]
    }
}
