use std::cmp::Ordering;

use crate::constants::Direction;
use crate::{Completion, ScheduleOutcome, SimTime, Workload};

use super::cost::service_delay;
use super::Scheduler;

/// One pending request in sweep order. `serviced` tombstones the slot in
/// place, so positional indices stay stable for the whole run.
#[derive(Debug, Clone)]
struct Slot {
    cylinder: f64,
    arrival: SimTime,
    serviced: bool,
}

/// Mutable state of a single SCAN run, threaded through the sweep routines.
///
/// `head` always equals the cylinder of the most recently serviced request,
/// `index` the position of that request in the cylinder-sorted slot array.
#[derive(Debug)]
struct SweepState {
    head: f64,
    direction: Direction,
    index: usize,
    clock: SimTime,
}

/// The SCAN ("Elevator") policy: a two-direction sweep over the requests in
/// cylinder order.
///
/// Each outer step performs one directional pass from the current index to
/// the array boundary, servicing every pending request that has arrived by
/// the running clock; the clock advances during the pass, so requests
/// arriving mid-pass are picked up without reversing. When nothing has
/// arrived yet, the clock first jumps to the earliest pending arrival,
/// provided that request lies in the current sweep direction. Every pass is
/// followed by a direction reversal.
pub struct Elevator;

impl Scheduler for Elevator {
    fn name(&self) -> &'static str {
        "Elevator"
    }

    fn run(&self, workload: &Workload) -> ScheduleOutcome {
        let mut slots: Vec<Slot> = workload
            .iter()
            .map(|request| Slot {
                cylinder: request.cylinder(),
                arrival: request.arrival(),
                serviced: false,
            })
            .collect();
        slots.sort_by(|a, b| a.cylinder.partial_cmp(&b.cylinder).unwrap_or(Ordering::Equal));

        let mut state = SweepState {
            head: workload.start_position(),
            direction: Direction::Up,
            index: start_index(&slots),
            clock: 0.0,
        };

        let mut done: Vec<Completion> = Vec::with_capacity(slots.len());
        while done.len() < slots.len() {
            if !any_eligible(&slots, state.clock) {
                wait_for_earliest(&slots, &mut state);
            }
            sweep(&mut slots, &mut state, &mut done);
            state.direction = state.direction.reversed();
        }

        ScheduleOutcome::new(done)
    }
}

/// First position, in cylinder order, holding the workload-wide minimum
/// arrival time. The first sweep starts there.
fn start_index(slots: &[Slot]) -> usize {
    let earliest = slots
        .iter()
        .map(|slot| slot.arrival)
        .fold(f64::INFINITY, f64::min);
    slots
        .iter()
        .position(|slot| slot.arrival == earliest)
        .unwrap_or(0)
}

fn any_eligible(slots: &[Slot], clock: SimTime) -> bool {
    slots
        .iter()
        .any(|slot| !slot.serviced && slot.arrival <= clock)
}

/// Idle step: advance the clock to the earliest pending arrival, but only
/// when that request lies in the current sweep direction from the current
/// index. When it lies behind, the following pass services nothing and the
/// reversal brings it into range on the next step.
fn wait_for_earliest(slots: &[Slot], state: &mut SweepState) {
    let earliest = slots
        .iter()
        .filter(|slot| !slot.serviced)
        .map(|slot| slot.arrival)
        .fold(f64::INFINITY, f64::min);

    let in_range = match state.direction {
        Direction::Up => (state.index..slots.len())
            .find(|&i| !slots[i].serviced && slots[i].arrival == earliest),
        Direction::Down => (0..=state.index)
            .rev()
            .find(|&i| !slots[i].serviced && slots[i].arrival == earliest),
    };

    if in_range.is_some() {
        state.clock = earliest;
    }
}

/// One directional pass from the current index to the array boundary.
fn sweep(slots: &mut [Slot], state: &mut SweepState, done: &mut Vec<Completion>) {
    match state.direction {
        Direction::Up => {
            for i in state.index..slots.len() {
                try_service(slots, state, done, i);
            }
        }
        Direction::Down => {
            for i in (0..=state.index).rev() {
                try_service(slots, state, done, i);
            }
        }
    }
}

fn try_service(slots: &mut [Slot], state: &mut SweepState, done: &mut Vec<Completion>, i: usize) {
    let slot = &mut slots[i];
    if slot.serviced || slot.arrival > state.clock {
        return;
    }

    state.clock += service_delay(state.head, slot.cylinder);
    state.head = slot.cylinder;
    state.index = i;
    slot.serviced = true;
    done.push(Completion::new(slot.cylinder, state.clock));
}
