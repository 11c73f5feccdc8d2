//! Predicted arrivals.

use super::{BusStopCode, StopStyle};

/// One predicted arrival of a service at a stop.
///
/// Arrivals carry no identity beyond their field values; the board treats
/// them as a flat sequence that is rebuilt per stop on every poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub stop_code: BusStopCode,
    pub service_number: String,
    /// Seconds until arrival. Negative once the predicted time has passed.
    pub time_to_arrival_secs: i64,
    /// Style of the owning stop, copied at creation.
    pub style: StopStyle,
}

impl Arrival {
    pub fn new(
        stop_code: BusStopCode,
        service_number: impl Into<String>,
        time_to_arrival_secs: i64,
        style: StopStyle,
    ) -> Self {
        Self {
            stop_code,
            service_number: service_number.into(),
            time_to_arrival_secs,
            style,
        }
    }
}
