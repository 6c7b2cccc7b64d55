use crate::SimTime;

/// Fixed rotational latency paid on every service.
pub const ROTATIONAL_DELAY: SimTime = 4.17;

/// Fixed transfer latency paid on every service.
pub const TRANSFER_DELAY: SimTime = 0.13;

/// One-time penalty paid whenever the head physically moves.
pub const START_STOP_DELAY: SimTime = 1.0;

/// Seek time scale: one time unit per this many cylinders of travel.
pub const CYLINDER_DIVISIONS: f64 = 4000.0;

/// Bounds for randomly generated workloads.
pub const MIN_CYLINDER: f64 = 1000.0;
pub const MAX_CYLINDER: f64 = 10000.0;
pub const MIN_ARRIVAL: SimTime = 0.0;
pub const MAX_ARRIVAL: SimTime = 100.0;

/// Head position used for every randomly generated workload.
pub const RANDOM_START_POSITION: f64 = 1000.0;

/// Sweep direction of the elevator head, in cylinder order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}
