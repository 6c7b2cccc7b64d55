mod request;
pub mod scheduler;
pub mod workload;

pub use request::{Completion, Request};
pub use workload::Workload;

pub type SimTime = f64;
