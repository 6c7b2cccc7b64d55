use crate::{Completion, SimTime};

/// The product of one scheduler run: every completion in service order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    completions: Vec<Completion>,
}

impl ScheduleOutcome {
    pub fn new(completions: Vec<Completion>) -> Self {
        Self { completions }
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    pub fn len(&self) -> usize {
        self.completions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }

    /// Arithmetic mean of the completion times, 0.0 for an empty run.
    /// Workload sources reject empty workloads before any run starts.
    pub fn average(&self) -> SimTime {
        if self.completions.is_empty() {
            return 0.0;
        }
        let sum: SimTime = self.completions.iter().map(|c| c.finished_at()).sum();
        sum / self.completions.len() as SimTime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_the_exact_sum_over_count() {
        let outcome = ScheduleOutcome::new(vec![
            Completion::new(1000.0, 4.0),
            Completion::new(2000.0, 6.0),
            Completion::new(3000.0, 11.0),
        ]);

        assert_eq!(outcome.average(), (4.0 + 6.0 + 11.0) / 3.0);
    }

    #[test]
    fn empty_outcome_average_is_defined() {
        assert_eq!(ScheduleOutcome::new(Vec::new()).average(), 0.0);
    }
}
