//! The working set of arrivals across all stops.

use crate::domain::{Arrival, BusDirectory, BusStopCode};

use super::scheduler::arrange;

/// Current best-known arrivals for every polled stop.
///
/// The set is a flat sequence, not a keyed map. Each stop's rows are
/// replaced as a unit whenever that stop is polled; different stops may
/// reflect data fetched at different times. Replacement appends, and
/// [`sort_and_promote`](Self::sort_and_promote) reorders in place.
#[derive(Debug, Clone, Default)]
pub struct ArrivalSet {
    arrivals: Vec<Arrival>,
}

impl ArrivalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every arrival for `stop_code`, then append `arrivals`.
    ///
    /// Takes `&mut self`, so no reader can observe the set between the
    /// removal and the append.
    pub fn replace_stop_arrivals(
        &mut self,
        stop_code: BusStopCode,
        arrivals: impl IntoIterator<Item = Arrival>,
    ) {
        self.arrivals.retain(|a| a.stop_code != stop_code);
        self.arrivals.extend(arrivals);
    }

    /// Sort by countdown and apply bus guarantees to the stored order.
    ///
    /// Ties in the next sort keep the order left behind here.
    pub fn sort_and_promote(&mut self, buses: &BusDirectory, rows: usize) {
        arrange(&mut self.arrivals, buses, rows);
    }

    /// Arrivals currently held for one stop, in stored order.
    pub fn for_stop(&self, stop_code: BusStopCode) -> impl Iterator<Item = &Arrival> {
        self.arrivals.iter().filter(move |a| a.stop_code == stop_code)
    }

    pub fn as_slice(&self) -> &[Arrival] {
        &self.arrivals
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}
