use std::cmp::Ordering;

use crate::{Completion, Request, ScheduleOutcome, SimTime, Workload};

use super::cost::service_delay;
use super::Scheduler;

/// First-Come-First-Served: requests are replayed strictly in arrival
/// order, waiting out any request that has not arrived yet. Arrival ties
/// keep their original relative order (the sort is stable).
pub struct FirstComeFirstServed;

impl Scheduler for FirstComeFirstServed {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, workload: &Workload) -> ScheduleOutcome {
        let mut queue: Vec<Request> = workload.requests().to_vec();
        queue.sort_by(|a, b| a.arrival().partial_cmp(&b.arrival()).unwrap_or(Ordering::Equal));

        let mut head = workload.start_position();
        let mut clock: SimTime = 0.0;
        let mut done: Vec<Completion> = Vec::with_capacity(queue.len());

        for request in &queue {
            if clock < request.arrival() {
                clock = request.arrival();
            }
            clock += service_delay(head, request.cylinder());
            head = request.cylinder();
            done.push(Completion::new(request.cylinder(), clock));
        }

        ScheduleOutcome::new(done)
    }
}
