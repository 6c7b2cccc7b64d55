pub mod console;
pub mod models;
pub mod utils;

pub use models::scheduler;
pub use models::scheduler::ScheduleOutcome;
pub use models::{Completion, Request, SimTime, Workload};
pub use utils::constants;
pub use utils::WorkloadError;
