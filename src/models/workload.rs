use rand::Rng;

use crate::constants::{
    MAX_ARRIVAL, MAX_CYLINDER, MIN_ARRIVAL, MIN_CYLINDER, RANDOM_START_POSITION,
};

use super::Request;

/// The full input to one comparison run: the starting head position and
/// every request, known before simulation starts.
///
/// A `Workload` is never mutated by a scheduler. Each policy builds its own
/// working copy from it, so one run's bookkeeping stays invisible to the
/// other.
#[derive(Clone, Debug)]
pub struct Workload {
    start_position: f64,
    requests: Vec<Request>,
}

impl Workload {
    pub fn new(start_position: f64, requests: Vec<Request>) -> Self {
        Self {
            start_position,
            requests,
        }
    }

    /// Draws `count` requests at random: distinct cylinders uniform over
    /// [1000, 10000], arrival times uniform over [0, 100]. Cylinders are
    /// rejection-sampled until `count` distinct values are collected. The
    /// head always starts at 1000.
    pub fn random(count: usize) -> Self {
        let mut rng = rand::thread_rng();

        let mut cylinders: Vec<f64> = Vec::with_capacity(count);
        while cylinders.len() < count {
            let cylinder = rng.gen_range(MIN_CYLINDER..=MAX_CYLINDER);
            if !cylinders.contains(&cylinder) {
                cylinders.push(cylinder);
            }
        }

        let requests = cylinders
            .into_iter()
            .map(|cylinder| Request::new(cylinder, rng.gen_range(MIN_ARRIVAL..=MAX_ARRIVAL)))
            .collect();

        Self::new(RANDOM_START_POSITION, requests)
    }

    pub fn start_position(&self) -> f64 {
        self.start_position
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Request> {
        self.requests.iter()
    }
}
