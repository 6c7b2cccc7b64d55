use super::SimTime;

/// A single synthetic I/O request. Immutable once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    cylinder: f64,     // X_i : target head position.
    arrival: SimTime,  // T_i : first time available.
}

impl Request {
    pub fn new(cylinder: f64, arrival: SimTime) -> Self {
        Self { cylinder, arrival }
    }

    pub fn cylinder(&self) -> f64 {
        self.cylinder
    }

    pub fn arrival(&self) -> SimTime {
        self.arrival
    }
}

/// A serviced request: its cylinder and the clock value at which its
/// service finished. Emitted in service order.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    cylinder: f64,
    finished_at: SimTime,
}

impl Completion {
    pub fn new(cylinder: f64, finished_at: SimTime) -> Self {
        Self {
            cylinder,
            finished_at,
        }
    }

    pub fn cylinder(&self) -> f64 {
        self.cylinder
    }

    pub fn finished_at(&self) -> SimTime {
        self.finished_at
    }
}
