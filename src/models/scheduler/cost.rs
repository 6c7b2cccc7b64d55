use crate::constants::{CYLINDER_DIVISIONS, ROTATIONAL_DELAY, START_STOP_DELAY, TRANSFER_DELAY};
use crate::SimTime;

/// Incremental delay for servicing a request at `cylinder` with the head at
/// `head`: fixed rotational and transfer latencies, a seek term proportional
/// to the distance travelled, and a start/stop penalty incurred only when
/// the head physically moves.
///
/// The caller is responsible for having already advanced its clock past the
/// request's arrival time; the delay itself does not depend on the clock.
pub fn service_delay(head: f64, cylinder: f64) -> SimTime {
    let seek = (cylinder - head).abs() / CYLINDER_DIVISIONS;
    let start_stop = if cylinder != head { START_STOP_DELAY } else { 0.0 };

    ROTATIONAL_DELAY + TRANSFER_DELAY + seek + start_stop
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_service_pays_all_four_terms() {
        // 4.17 + 0.13 + 1000/4000 + 1.0
        assert_eq!(service_delay(1000.0, 2000.0), 5.55);
    }

    #[test]
    fn seek_distance_is_symmetric() {
        assert_eq!(service_delay(2000.0, 1000.0), service_delay(1000.0, 2000.0));
    }

    #[test]
    fn stationary_service_skips_the_start_stop_penalty() {
        assert_eq!(service_delay(3000.0, 3000.0), ROTATIONAL_DELAY + TRANSFER_DELAY);
    }
}
